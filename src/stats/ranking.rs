//! Averages, shares and top-N city rankings.
//!
//! Both city rankings draw from the same significant pool (cities with at
//! least the threshold share of all vacancies) and are sorted independently:
//! one by share, one by average salary.

use super::series::Series;
use crate::aggregator::Buckets;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Mean of `values`, truncated toward zero (0 for an empty slice)
pub fn truncated_mean(values: &[f64]) -> i64 {
    if values.is_empty() {
        return 0;
    }

    let sum: f64 = values.iter().sum();
    (sum / values.len() as f64) as i64
}

/// Round to a fixed number of decimal digits
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// Truncated mean per key, in bucket order
pub fn average_by_key<K: Eq + Hash + Clone>(buckets: &Buckets<K>) -> Series<K, i64> {
    buckets
        .iter()
        .map(|(key, values)| (key.clone(), truncated_mean(values)))
        .collect()
}

/// Number of contributions per key, in bucket order
pub fn count_by_key<K: Eq + Hash + Clone>(buckets: &Buckets<K>) -> Series<K, usize> {
    buckets
        .iter()
        .map(|(key, values)| (key.clone(), values.len()))
        .collect()
}

/// Cities whose vacancy share reaches `threshold`
///
/// Shares are rounded to `precision` digits before the comparison. The
/// result keeps first-seen city order and is the shared candidate pool of
/// both rankings. An empty total yields an empty pool.
pub fn significant_cities(
    by_city: &Buckets<String>,
    total: usize,
    threshold: f64,
    precision: u32,
) -> Vec<(String, f64)> {
    if total == 0 {
        return Vec::new();
    }

    let pool: Vec<(String, f64)> = by_city
        .iter()
        .map(|(city, salaries)| {
            let share = round_to(salaries.len() as f64 / total as f64, precision);
            (city.clone(), share)
        })
        .filter(|(_, share)| *share >= threshold)
        .collect();

    debug!(
        "{} of {} cities reach the {} share threshold",
        pool.len(),
        by_city.len(),
        threshold
    );

    pool
}

/// Stable sort by `compare`, then keep the first `top_n` entries
///
/// Entries comparing equal keep their input order.
pub fn rank_top_n<K, V, F>(mut entries: Vec<(K, V)>, top_n: usize, mut compare: F) -> Series<K, V>
where
    F: FnMut(&V, &V) -> Ordering,
{
    entries.sort_by(|a, b| compare(&a.1, &b.1));
    entries.truncate(top_n);
    entries.into_iter().collect()
}

/// Top cities by vacancy share, highest first
pub fn rank_city_shares(pool: &[(String, f64)], top_n: usize) -> Series<String, f64> {
    rank_top_n(pool.to_vec(), top_n, |a, b| b.total_cmp(a))
}

/// Top cities by average salary, highest first
///
/// Eligibility is membership in the whole pool, not in the truncated
/// share ranking.
pub fn rank_city_salaries(
    by_city: &Buckets<String>,
    pool: &[(String, f64)],
    top_n: usize,
) -> Series<String, i64> {
    let eligible: HashSet<&str> = pool.iter().map(|(city, _)| city.as_str()).collect();

    let averages: Vec<(String, i64)> = by_city
        .iter()
        .filter(|(city, _)| eligible.contains(city.as_str()))
        .map(|(city, salaries)| (city.clone(), truncated_mean(salaries)))
        .collect();

    rank_top_n(averages, top_n, |a, b| b.cmp(a))
}
