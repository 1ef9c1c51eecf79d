//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads configuration
//! 2. Streams the CSV export through the aggregator
//! 3. Computes the six result series
//! 4. Prints the summary
//! 5. Writes the JSON report (if requested)

use super::models::AnalyzeArgs;
use crate::aggregator::VacancyAggregator;
use crate::output::{format_summary, format_tables, write_report, StatsReport};
use crate::parser::{RecordReader, VacancyNormalizer};
use crate::stats::compute_stats;
use crate::utils::config::{load_config, StatsConfig, MAX_TOP_N};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The assembled report, also written to disk if `output_json` is set
///
/// # Errors
/// * Config file read or validation failures
/// * CSV read errors
/// * Unknown currencies or malformed records
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<StatsReport> {
    let start_time = Instant::now();

    info!("Analyzing vacancies from: {}", args.input_csv.display());
    info!("Title filter: {:?}", args.vacancy_title);

    // Step 1: Configuration
    info!("Step 1/4: Loading configuration...");
    let config = resolve_config(&args)?;
    let ranking = config.ranking();
    debug!(
        "Ranking: threshold {}, top {}, {} currencies",
        ranking.significance_threshold,
        ranking.top_n,
        config.currency.len()
    );

    // Step 2: Aggregate
    info!("Step 2/4: Aggregating vacancy records...");
    let mut reader = RecordReader::from_path(&args.input_csv)
        .with_context(|| format!("Failed to open {}", args.input_csv.display()))?;

    let aggregator = VacancyAggregator::new(
        VacancyNormalizer::new(config.currency),
        args.vacancy_title.as_str(),
    );
    let buckets = aggregator
        .try_aggregate(reader.by_ref())
        .context("Failed to aggregate vacancy records")?;

    debug!("Dropped {} rows with a wrong field count", reader.dropped());

    // Step 3: Statistics
    info!("Step 3/4: Computing statistics...");
    let stats = compute_stats(&buckets, &ranking);

    println!("{}", format_summary(&stats));
    if args.print_tables {
        println!();
        print!("{}", format_tables(&stats, &args.vacancy_title));
    }

    let report = StatsReport::new(
        args.input_csv.display().to_string(),
        args.vacancy_title.as_str(),
        &buckets,
        stats,
    );

    // Step 4: Write outputs
    match &args.output_json {
        Some(path) => {
            info!("Step 4/4: Writing report...");
            write_report(&report, path).context("Failed to write report JSON")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => info!("Step 4/4: Skipping report (no output path)"),
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Config file (or defaults) with CLI overrides applied
///
/// **Private** - internal helper for execute_analyze
fn resolve_config(args: &AnalyzeArgs) -> Result<StatsConfig> {
    let mut config = match &args.config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StatsConfig::default(),
    };

    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }
    if let Some(threshold) = args.threshold {
        config.significance_threshold = threshold;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.input_csv.as_os_str().is_empty() {
        anyhow::bail!("Input file path cannot be empty");
    }

    if !args.input_csv.is_file() {
        anyhow::bail!("Input file not found: {}", args.input_csv.display());
    }

    if let Some(top_n) = args.top_n {
        if top_n == 0 {
            anyhow::bail!("top_n must be greater than 0");
        }
        if top_n > MAX_TOP_N {
            anyhow::bail!("top_n is too large (max {})", MAX_TOP_N);
        }
    }

    if let Some(threshold) = args.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            anyhow::bail!("threshold must be between 0 and 1");
        }
    }

    if let Some(path) = &args.output_json {
        crate::output::validate_path(path)?;
    }

    Ok(())
}
