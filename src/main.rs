//! Vacancy Stats CLI
//!
//! Salary and vacancy statistics from job-posting CSV exports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use vacancy_stats::commands::{
    display_rates, display_version, execute_analyze, validate_args, validate_report_file,
    AnalyzeArgs,
};
use vacancy_stats::utils::config::{load_config, StatsConfig};

/// Vacancy Stats - labor-market statistics from job postings
#[derive(Parser, Debug)]
#[command(name = "vacancy-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute statistics from a CSV export
    Analyze {
        /// CSV file with vacancy records
        #[arg(short, long)]
        file: PathBuf,

        /// Job title substring for the filtered series (case-sensitive)
        #[arg(short, long)]
        title: String,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML config with currency rates and ranking policy
        #[arg(short, long, env = "VACANCY_STATS_CONFIG")]
        config: Option<PathBuf>,

        /// Number of cities in each ranking
        #[arg(long)]
        top_n: Option<usize>,

        /// Minimum vacancy share for a city to be ranked
        #[arg(long)]
        threshold: Option<f64>,

        /// Print per-year and per-city tables
        #[arg(long)]
        tables: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display the currency conversion table
    Rates {
        /// TOML config with currency overrides
        #[arg(short, long, env = "VACANCY_STATS_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            file,
            title,
            output,
            config,
            top_n,
            threshold,
            tables,
        } => {
            let args = AnalyzeArgs {
                input_csv: file,
                vacancy_title: title,
                output_json: output,
                config_path: config,
                top_n,
                threshold,
                print_tables: tables,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Rates { config } => {
            let config = match config {
                Some(path) => load_config(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => StatsConfig::default(),
            };
            display_rates(&config.currency);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
