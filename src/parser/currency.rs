//! Currency conversion onto roubles.
//!
//! Rates are "roubles per one unit of the source currency". The table is an
//! immutable value handed to the normalizer at construction time.

use crate::utils::error::StatsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in rates
const DEFAULT_RATES: &[(&str, f64)] = &[
    ("AZN", 35.68),
    ("BYR", 23.91),
    ("EUR", 59.90),
    ("GEL", 21.74),
    ("KGS", 0.76),
    ("KZT", 0.13),
    ("RUR", 1.0),
    ("UAH", 1.64),
    ("USD", 60.66),
    ("UZS", 0.0055),
];

/// Mapping from currency code to rouble multiplier
///
/// Deserializing merges the given rates over the built-in ones, so a config
/// file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct CurrencyTable {
    rates: BTreeMap<String, f64>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self {
            rates: DEFAULT_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, f64>> for CurrencyTable {
    fn from(overrides: BTreeMap<String, f64>) -> Self {
        overrides
            .into_iter()
            .fold(Self::default(), |table, (code, rate)| table.with_rate(code, rate))
    }
}

impl From<CurrencyTable> for BTreeMap<String, f64> {
    fn from(table: CurrencyTable) -> Self {
        table.rates
    }
}

impl CurrencyTable {
    /// Table with no rates at all
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Add or replace a rate
    pub fn with_rate(mut self, code: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(code.into(), rate);
        self
    }

    /// Look up the rate for a currency code
    ///
    /// # Errors
    /// * `StatsError::UnknownCurrency` - code is not in the table
    pub fn rate(&self, code: &str) -> Result<f64, StatsError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| StatsError::UnknownCurrency(code.to_string()))
    }

    /// Convert an amount in `code` to roubles
    pub fn convert(&self, code: &str, amount: f64) -> Result<f64, StatsError> {
        Ok(self.rate(code)? * amount)
    }

    /// Supported codes, sorted
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// (code, rate) pairs, sorted by code
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let table = CurrencyTable::default();
        assert_eq!(table.len(), 10);
        assert_eq!(table.rate("RUR").unwrap(), 1.0);
        assert_eq!(table.rate("USD").unwrap(), 60.66);
        assert_eq!(table.rate("UZS").unwrap(), 0.0055);
    }

    #[test]
    fn test_unknown_currency() {
        let table = CurrencyTable::default();
        match table.rate("XXX") {
            Err(StatsError::UnknownCurrency(code)) => assert_eq!(code, "XXX"),
            other => panic!("expected UnknownCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(CurrencyTable::default().rate("usd").is_err());
    }

    #[test]
    fn test_convert() {
        let table = CurrencyTable::default();
        assert_eq!(table.convert("EUR", 100.0).unwrap(), 5990.0);
    }

    #[test]
    fn test_codes_sorted() {
        let table = CurrencyTable::default();
        let codes: Vec<&str> = table.codes().collect();
        assert_eq!(codes.first(), Some(&"AZN"));
        assert_eq!(codes.last(), Some(&"UZS"));
    }

    #[test]
    fn test_overrides_merge_with_defaults() {
        let mut overrides = BTreeMap::new();
        overrides.insert("USD".to_string(), 90.0);
        overrides.insert("CNY".to_string(), 12.5);

        let table = CurrencyTable::from(overrides);

        assert_eq!(table.rate("USD").unwrap(), 90.0);
        assert_eq!(table.rate("CNY").unwrap(), 12.5);
        assert_eq!(table.rate("KZT").unwrap(), 0.13);
        assert_eq!(table.len(), 11);
    }
}
