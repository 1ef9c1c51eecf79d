//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// A record that passed the shape filter but cannot be normalized
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid number in field {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    #[error("Cannot read year from timestamp: {0:?}")]
    InvalidYear(String),
}

/// Errors that abort an aggregation run
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] RecordError),

    #[error("Failed to read CSV input: {0}")]
    Read(#[from] csv::Error),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
