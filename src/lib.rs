//! Vacancy Stats
//!
//! Salary and vacancy statistics from job-posting exports: trends by year
//! (overall and for a selected job title) and top-city rankings by salary
//! and by vacancy share.
//!
//! This crate provides the core implementation for the
//! `vacancy-stats` CLI tool.
//!
//! ## Library use
//!
//! ```ignore
//! use vacancy_stats::aggregator::VacancyAggregator;
//! use vacancy_stats::parser::{RecordReader, VacancyNormalizer};
//! use vacancy_stats::stats::compute_stats;
//! use vacancy_stats::utils::config::RankingConfig;
//!
//! let reader = RecordReader::from_path("vacancies.csv")?;
//! let aggregator = VacancyAggregator::new(VacancyNormalizer::default(), "Developer");
//! let buckets = aggregator.try_aggregate(reader)?;
//! let stats = compute_stats(&buckets, &RankingConfig::default());
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod stats;
pub mod utils;
