use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// CSV export with vacancy records
    pub input_csv: PathBuf,

    /// Title substring for the filtered series
    pub vacancy_title: String,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// TOML configuration file (optional)
    pub config_path: Option<PathBuf>,

    /// Override for the number of ranked cities
    pub top_n: Option<usize>,

    /// Override for the significance threshold
    pub threshold: Option<f64>,

    /// Print the per-year and per-city tables after the summary
    pub print_tables: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from("vacancies.csv"),
            vacancy_title: String::new(),
            output_json: None,
            config_path: None,
            top_n: None,
            threshold: None,
            print_tables: false,
        }
    }
}
