//! Aggregation of vacancy records into salary buckets.
//!
//! This module transforms the raw record stream into:
//! - Salaries per publication year
//! - Salaries per year for postings matching a title filter
//! - Salaries per city, plus the accepted-record total

pub mod buckets;
pub mod collector;

// Re-export main types
pub use buckets::Buckets;
pub use collector::{BucketSet, VacancyAggregator};
