//! Output JSON schema for statistics reports.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::BucketSet;
use crate::stats::{DerivedStats, YearRow};
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// CSV file the statistics were computed from
    pub source_file: String,

    /// Title substring used for the filtered series
    pub vacancy_title: String,

    /// Number of accepted vacancy records
    pub total_vacancies: usize,

    /// Number of accepted records whose title matched
    ///
    /// Zero means the filtered series are placeholders, not real zero salaries.
    pub matched_vacancies: usize,

    /// The six result series
    pub stats: DerivedStats,

    /// Per-year table (salary and count, overall and filtered)
    pub years: Vec<YearRow>,

    /// Share of vacancies outside the ranked cities
    pub other_share: f64,

    /// Timestamp when report was generated
    pub generated_at: String,
}

impl StatsReport {
    /// Assemble a report from a finished run
    pub fn new(
        source_file: impl Into<String>,
        vacancy_title: impl Into<String>,
        buckets: &BucketSet,
        stats: DerivedStats,
    ) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            source_file: source_file.into(),
            vacancy_title: vacancy_title.into(),
            total_vacancies: buckets.total(),
            matched_vacancies: buckets.matched(),
            years: stats.year_rows(),
            other_share: stats.other_share(),
            stats,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
