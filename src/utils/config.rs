//! Configuration and constants for the CLI.
//!
//! Defaults live here as constants. A TOML file can override the currency
//! table and the ranking policy:
//!
//! ```toml
//! significance_threshold = 0.02
//! top_n = 5
//!
//! [currency]
//! USD = 92.5
//! ```

use crate::parser::currency::CurrencyTable;
use crate::utils::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Column names in the vacancy export
pub const FIELD_TITLE: &str = "name";
pub const FIELD_SALARY_FROM: &str = "salary_from";
pub const FIELD_SALARY_TO: &str = "salary_to";
pub const FIELD_CURRENCY: &str = "salary_currency";
pub const FIELD_CITY: &str = "area_name";
pub const FIELD_PUBLISHED_AT: &str = "published_at";

/// Minimum vacancy share a city needs to be ranked (1%)
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 0.01;

/// Length of both city rankings
pub const DEFAULT_TOP_N: usize = 10;

/// Decimal digits kept in vacancy shares
pub const SHARE_PRECISION: u32 = 4;

/// Upper bound for `top_n`
pub const MAX_TOP_N: usize = 1000;

/// Ranking policy applied to the city buckets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingConfig {
    pub significance_threshold: f64,
    pub top_n: usize,
    pub share_precision: u32,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            share_precision: SHARE_PRECISION,
        }
    }
}

/// Complete run configuration, as read from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Minimum vacancy share for the city rankings
    pub significance_threshold: f64,

    /// Number of cities kept in each ranking
    pub top_n: usize,

    /// Currency rates, merged over the built-in table
    pub currency: CurrencyTable,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            currency: CurrencyTable::default(),
        }
    }
}

impl StatsConfig {
    /// Ranking part of the configuration
    pub fn ranking(&self) -> RankingConfig {
        RankingConfig {
            significance_threshold: self.significance_threshold,
            top_n: self.top_n,
            share_precision: SHARE_PRECISION,
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    /// * `ConfigError::Invalid` - threshold outside [0, 1], top_n out of range,
    ///   or a non-positive currency rate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.significance_threshold) {
            return Err(ConfigError::Invalid(format!(
                "significance_threshold must be within [0, 1], got {}",
                self.significance_threshold
            )));
        }

        if self.top_n == 0 || self.top_n > MAX_TOP_N {
            return Err(ConfigError::Invalid(format!(
                "top_n must be between 1 and {}, got {}",
                MAX_TOP_N, self.top_n
            )));
        }

        if let Some((code, rate)) = self
            .currency
            .iter()
            .find(|(_, rate)| !rate.is_finite() || *rate <= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "currency rate for {} must be positive, got {}",
                code, rate
            )));
        }

        Ok(())
    }
}

/// Load and validate a configuration file
///
/// # Errors
/// * `ConfigError::Io` - file cannot be read
/// * `ConfigError::Parse` - TOML is invalid
/// * `ConfigError::Invalid` - values out of range
pub fn load_config(path: impl AsRef<Path>) -> Result<StatsConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: StatsConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
