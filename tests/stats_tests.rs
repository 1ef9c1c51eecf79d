//! End-to-end properties of the aggregation and ranking pipeline.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use vacancy_stats::aggregator::VacancyAggregator;
use vacancy_stats::parser::{RawRecord, VacancyNormalizer};
use vacancy_stats::stats::{compute_stats, DerivedStats, Series};
use vacancy_stats::utils::config::RankingConfig;

fn record(title: &str, from: i64, to: i64, city: &str, year: i32) -> RawRecord {
    [
        ("name", title.to_string()),
        ("salary_from", from.to_string()),
        ("salary_to", to.to_string()),
        ("salary_currency", "RUR".to_string()),
        ("area_name", city.to_string()),
        ("published_at", format!("{}-02-10T08:00:00+0300", year)),
    ]
    .into_iter()
    .collect()
}

fn run(records: Vec<RawRecord>, filter: &str) -> DerivedStats {
    let buckets = VacancyAggregator::new(VacancyNormalizer::default(), filter)
        .aggregate(records)
        .unwrap();
    compute_stats(&buckets, &RankingConfig::default())
}

/// 40 cities with uneven sizes and salaries, 1 000 vacancies
fn large_input() -> Vec<RawRecord> {
    let mut records = Vec::new();
    for city in 0..40 {
        let vacancies = if city < 15 { 50 } else { 10 };
        for i in 0..vacancies {
            let salary = 1_000 * (city as i64 % 7 + 1) + i as i64;
            let title = if i % 3 == 0 { "Rust developer" } else { "Analyst" };
            records.push(record(title, salary, salary + 100, &format!("city{:02}", city), 2015 + (i % 5)));
        }
    }
    records
}

fn keys<K: Clone + Eq + std::hash::Hash, V>(series: &Series<K, V>) -> HashSet<K> {
    series.keys().cloned().collect()
}

#[test]
fn test_three_record_scenario() {
    let stats = run(
        vec![
            record("Developer", 100, 200, "A", 2020),
            record("Developer", 100, 200, "A", 2020),
            record("Developer", 50, 150, "B", 2021),
        ],
        "Developer",
    );

    assert_eq!(stats.salary_by_year, Series::from_iter([(2020, 150), (2021, 100)]));
    assert_eq!(stats.count_by_year, Series::from_iter([(2020, 2), (2021, 1)]));
    assert_eq!(
        stats.share_by_city,
        Series::from_iter([("A".to_string(), 0.6667), ("B".to_string(), 0.3333)])
    );
    assert_eq!(
        stats.salary_by_city,
        Series::from_iter([("A".to_string(), 150), ("B".to_string(), 100)])
    );
}

#[test]
fn test_year_series_share_keys() {
    let stats = run(large_input(), "Rust");
    assert_eq!(keys(&stats.salary_by_year), keys(&stats.count_by_year));
    assert_eq!(keys(&stats.salary_by_year_for_title), keys(&stats.count_by_year_for_title));
}

#[test]
fn test_idempotent() {
    assert_eq!(run(large_input(), "Rust"), run(large_input(), "Rust"));
}

#[test]
fn test_threshold_law() {
    let stats = run(large_input(), "Rust");

    assert!(stats.share_by_city.values().all(|&share| share >= 0.01));

    // Cities with 10 of 1000 vacancies sit exactly at 1%; add smaller ones
    let mut records = large_input();
    for i in 0..5 {
        records.push(record("QA", 100_000, 100_000, "tiny", 2020 + i));
    }
    let stats = run(records, "QA");
    assert!(!stats.share_by_city.contains_key(&"tiny".to_string()));
    assert!(!stats.salary_by_city.contains_key(&"tiny".to_string()));
}

#[test]
fn test_truncation_and_ranking_laws() {
    let stats = run(large_input(), "Rust");

    assert_eq!(stats.share_by_city.len(), 10);
    assert_eq!(stats.salary_by_city.len(), 10);

    let shares: Vec<f64> = stats.share_by_city.values().copied().collect();
    assert!(shares.windows(2).all(|w| w[0] >= w[1]));

    let salaries: Vec<i64> = stats.salary_by_city.values().copied().collect();
    assert!(salaries.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_subset_law_small_pool() {
    let mut records = Vec::new();
    for (city, count, salary) in [("A", 5, 100), ("B", 3, 900), ("C", 2, 500)] {
        for _ in 0..count {
            records.push(record("QA", salary, salary, city, 2020));
        }
    }

    let stats = run(records, "QA");

    assert!(keys(&stats.salary_by_city).is_subset(&keys(&stats.share_by_city)));
    assert_eq!(stats.share_by_city.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(stats.salary_by_city.keys().collect::<Vec<_>>(), vec!["B", "C", "A"]);
}

#[test]
fn test_share_ties_keep_first_seen_order() {
    let mut records = Vec::new();
    for city in ["Omsk", "Kazan", "Perm"] {
        records.push(record("QA", 100, 100, city, 2020));
    }

    let stats = run(records, "QA");
    assert_eq!(stats.share_by_city.keys().collect::<Vec<_>>(), vec!["Omsk", "Kazan", "Perm"]);
}

#[test]
fn test_empty_filter_law() {
    let stats = run(large_input(), "Haskell");

    assert_eq!(keys(&stats.salary_by_year_for_title), keys(&stats.salary_by_year));
    assert_eq!(keys(&stats.count_by_year_for_title), keys(&stats.count_by_year));
    assert!(stats.salary_by_year_for_title.values().all(|&v| v == 0));
    assert!(stats.count_by_year_for_title.values().all(|&v| v == 0));

    // Same key order as the unfiltered series
    assert_eq!(
        stats.salary_by_year_for_title.keys().collect::<Vec<_>>(),
        stats.salary_by_year.keys().collect::<Vec<_>>()
    );
}

#[test]
fn test_malformed_row_has_no_effect() {
    let clean = vec![
        record("QA", 100, 200, "A", 2020),
        record("QA", 300, 400, "B", 2021),
    ];
    let mut dirty = clean.clone();
    let broken: RawRecord = [
        ("name", "QA"),
        ("salary_from", "100"),
        ("salary_to", ""),
        ("salary_currency", "RUR"),
        ("area_name", "C"),
        ("published_at", "2022-01-01T00:00:00+0300"),
    ]
    .into_iter()
    .collect();
    dirty.insert(1, broken);

    assert_eq!(run(dirty, "QA"), run(clean, "QA"));
}

#[test]
fn test_empty_input() {
    let stats = run(Vec::new(), "QA");
    assert_eq!(stats, DerivedStats::default());
}

#[test]
fn test_custom_ranking_config() {
    let buckets = VacancyAggregator::new(VacancyNormalizer::default(), "Rust")
        .aggregate(large_input())
        .unwrap();

    let config = RankingConfig {
        significance_threshold: 0.02,
        top_n: 3,
        ..RankingConfig::default()
    };
    let stats = compute_stats(&buckets, &config);

    assert_eq!(stats.share_by_city.len(), 3);
    assert_eq!(stats.salary_by_city.len(), 3);
    // Only the 15 large cities (5% each) clear a 2% threshold
    assert!(stats
        .salary_by_city
        .keys()
        .all(|city| city.as_str() < "city15"));
}
