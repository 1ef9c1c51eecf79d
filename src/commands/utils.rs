use crate::output::read_report;
use crate::parser::CurrencyTable;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source_file);
    println!("  Title filter: {:?}", report.vacancy_title);
    println!("  Vacancies: {} ({} matching)", report.total_vacancies, report.matched_vacancies);
    println!("  Years: {}", report.stats.salary_by_year.len());
    println!("  Ranked cities: {}", report.stats.share_by_city.len());

    Ok(())
}

/// Display the active currency table
pub fn display_rates(table: &CurrencyTable) {
    println!("Currency rates (roubles per unit):");
    for (code, rate) in table.iter() {
        println!("  {:<4} {}", code, rate);
    }
}

/// Display version information
pub fn display_version() {
    println!("Vacancy Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Salary and vacancy statistics from job-posting exports.");
}
