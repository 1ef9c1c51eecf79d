//! Vacancy input: raw records, CSV reading and normalization.
//!
//! This module handles:
//! - Reading a CSV export into header-aligned raw records
//! - Converting salaries to roubles via the currency table
//! - Normalizing raw records into typed vacancies

pub mod currency;
pub mod reader;
pub mod record;
pub mod vacancy;

// Re-export main types
pub use currency::CurrencyTable;
pub use reader::RecordReader;
pub use record::RawRecord;
pub use vacancy::{Vacancy, VacancyNormalizer};
