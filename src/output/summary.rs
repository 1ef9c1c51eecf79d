//! Plain-text summary of the six result series.

use crate::stats::DerivedStats;

/// Render the six series, one labelled line each
///
/// # Example output
/// ```text
/// Salary by year: {2020: 150, 2021: 100}
/// Vacancies by year: {2020: 2, 2021: 1}
/// ...
/// ```
pub fn format_summary(stats: &DerivedStats) -> String {
    [
        format!("Salary by year: {}", stats.salary_by_year),
        format!("Vacancies by year: {}", stats.count_by_year),
        format!(
            "Salary by year for selected title: {}",
            stats.salary_by_year_for_title
        ),
        format!(
            "Vacancies by year for selected title: {}",
            stats.count_by_year_for_title
        ),
        format!("Salary by city (descending): {}", stats.salary_by_city),
        format!("Vacancy share by city (descending): {}", stats.share_by_city),
    ]
    .join("\n")
}

/// Render the per-year table and the city rankings as aligned columns
pub fn format_tables(stats: &DerivedStats, vacancy_title: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<6} {:>14} {:>14} {:>10} {:>10}\n",
        "Year", "Avg salary", "Avg (title)", "Count", "Count (t)"
    ));
    for row in stats.year_rows() {
        out.push_str(&format!(
            "{:<6} {:>14} {:>14} {:>10} {:>10}\n",
            row.year,
            row.average_salary,
            row.average_salary_for_title,
            row.vacancy_count,
            row.vacancy_count_for_title
        ));
    }
    out.push_str(&format!("(title filter: {:?})\n\n", vacancy_title));

    out.push_str(&format!(
        "{:<24} {:>12}   {:<24} {:>8}\n",
        "City", "Avg salary", "City", "Share"
    ));
    let salaries = stats.salary_by_city.iter();
    let shares = stats.share_by_city.iter();
    for ((city_a, salary), (city_b, share)) in salaries.zip(shares) {
        out.push_str(&format!(
            "{:<24} {:>12}   {:<24} {:>7.2}%\n",
            city_a,
            salary,
            city_b,
            share * 100.0
        ));
    }
    if !stats.is_empty() {
        out.push_str(&format!(
            "{:<24} {:>12}   {:<24} {:>7.2}%\n",
            "",
            "",
            "Other",
            stats.other_share() * 100.0
        ));
    }

    out
}
