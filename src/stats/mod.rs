//! Derived labor-market statistics.
//!
//! Reduces the raw buckets of an aggregation run to six ordered series:
//! 1. average salary per year
//! 2. vacancy count per year
//! 3. average salary per year for the filtered title
//! 4. vacancy count per year for the filtered title
//! 5. average salary per city (top N, by salary)
//! 6. vacancy share per city (top N, by share)

pub mod ranking;
pub mod series;

pub use ranking::{
    average_by_key, count_by_key, rank_city_salaries, rank_city_shares, rank_top_n, round_to,
    significant_cities, truncated_mean,
};
pub use series::Series;

use crate::aggregator::BucketSet;
use crate::utils::config::{RankingConfig, SHARE_PRECISION};
use log::debug;
use serde::{Deserialize, Serialize};

/// The six result series of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub salary_by_year: Series<i32, i64>,
    pub count_by_year: Series<i32, usize>,
    pub salary_by_year_for_title: Series<i32, i64>,
    pub count_by_year_for_title: Series<i32, usize>,
    pub salary_by_city: Series<String, i64>,
    pub share_by_city: Series<String, f64>,
}

/// Tuple form of [`DerivedStats`], in canonical order
pub type StatsParts = (
    Series<i32, i64>,
    Series<i32, usize>,
    Series<i32, i64>,
    Series<i32, usize>,
    Series<String, i64>,
    Series<String, f64>,
);

/// One line of the per-year table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: i32,
    pub average_salary: i64,
    pub average_salary_for_title: i64,
    pub vacancy_count: usize,
    pub vacancy_count_for_title: usize,
}

/// Compute all six series from an aggregation run
///
/// **Public** - main entry point of the ranking stage
///
/// # Arguments
/// * `buckets` - output of [`VacancyAggregator`](crate::aggregator::VacancyAggregator)
/// * `config` - significance threshold, top N and share precision
///
/// # Returns
/// Series with every year of the input and the two city rankings. With no
/// accepted records, every series is empty.
pub fn compute_stats(buckets: &BucketSet, config: &RankingConfig) -> DerivedStats {
    let salary_by_year = average_by_key(buckets.by_year());
    let count_by_year = count_by_key(buckets.by_year());

    let salary_by_year_for_title = average_by_key(buckets.by_year_filtered());
    let count_by_year_for_title = if buckets.matched() == 0 {
        // The zero-filled placeholders are not vacancies
        buckets
            .by_year_filtered()
            .keys()
            .map(|&year| (year, 0))
            .collect()
    } else {
        count_by_key(buckets.by_year_filtered())
    };

    let pool = significant_cities(
        buckets.by_city(),
        buckets.total(),
        config.significance_threshold,
        config.share_precision,
    );
    let share_by_city = rank_city_shares(&pool, config.top_n);
    let salary_by_city = rank_city_salaries(buckets.by_city(), &pool, config.top_n);

    debug!(
        "Ranked {} cities by share and {} by salary",
        share_by_city.len(),
        salary_by_city.len()
    );

    DerivedStats {
        salary_by_year,
        count_by_year,
        salary_by_year_for_title,
        count_by_year_for_title,
        salary_by_city,
        share_by_city,
    }
}

impl DerivedStats {
    /// Split into the six-element tuple
    pub fn into_parts(self) -> StatsParts {
        (
            self.salary_by_year,
            self.count_by_year,
            self.salary_by_year_for_title,
            self.count_by_year_for_title,
            self.salary_by_city,
            self.share_by_city,
        )
    }

    /// True when no year was observed
    pub fn is_empty(&self) -> bool {
        self.salary_by_year.is_empty()
    }

    /// Per-year table in year-series order
    ///
    /// Years without a filtered entry report 0 for the filtered columns.
    pub fn year_rows(&self) -> Vec<YearRow> {
        self.salary_by_year
            .iter()
            .map(|(&year, &average_salary)| YearRow {
                year,
                average_salary,
                average_salary_for_title: self
                    .salary_by_year_for_title
                    .get(&year)
                    .copied()
                    .unwrap_or(0),
                vacancy_count: self.count_by_year.get(&year).copied().unwrap_or(0),
                vacancy_count_for_title: self
                    .count_by_year_for_title
                    .get(&year)
                    .copied()
                    .unwrap_or(0),
            })
            .collect()
    }

    /// Share of vacancies outside the ranked cities
    pub fn other_share(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }

        let ranked: f64 = self.share_by_city.values().sum();
        round_to((1.0 - ranked).max(0.0), SHARE_PRECISION)
    }
}
