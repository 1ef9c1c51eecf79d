//! Output writers for statistics reports.
//!
//! This module handles:
//! - JSON reports (pretty printed, versioned)
//! - Text summaries and tables for stdout

pub mod json;
pub mod schema;
pub mod summary;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use schema::StatsReport;
pub use summary::{format_summary, format_tables};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
