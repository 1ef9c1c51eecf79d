//! Normalization of raw records into typed vacancies.

use super::currency::CurrencyTable;
use super::record::RawRecord;
use crate::utils::config::{
    FIELD_CITY, FIELD_CURRENCY, FIELD_PUBLISHED_AT, FIELD_SALARY_FROM, FIELD_SALARY_TO,
    FIELD_TITLE,
};
use crate::utils::error::{RecordError, StatsError};

/// A normalized job posting
#[derive(Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub title: String,
    pub salary_from: i64,
    pub salary_to: i64,
    pub currency: String,

    /// Midpoint of the salary range, in roubles
    pub representative_salary: f64,

    pub city: String,
    pub year: i32,
}

/// Turns raw records into vacancies using a fixed currency table
#[derive(Debug, Clone, Default)]
pub struct VacancyNormalizer {
    currencies: CurrencyTable,
}

impl VacancyNormalizer {
    pub fn new(currencies: CurrencyTable) -> Self {
        Self { currencies }
    }

    /// Normalize one record
    ///
    /// # Errors
    /// * `StatsError::MalformedRecord` - a field is missing or unparsable
    /// * `StatsError::UnknownCurrency` - the currency is not in the table
    pub fn normalize(&self, record: &RawRecord) -> Result<Vacancy, StatsError> {
        let salary_from = parse_salary(record, FIELD_SALARY_FROM)?;
        let salary_to = parse_salary(record, FIELD_SALARY_TO)?;
        let currency = record.require(FIELD_CURRENCY)?;

        // Bounds are summed after truncation
        let representative_salary =
            self.currencies.convert(currency, salary_from.saturating_add(salary_to) as f64)? / 2.0;

        Ok(Vacancy {
            title: record.require(FIELD_TITLE)?.to_string(),
            salary_from,
            salary_to,
            currency: currency.to_string(),
            representative_salary,
            city: record.require(FIELD_CITY)?.to_string(),
            year: parse_year(record.require(FIELD_PUBLISHED_AT)?)?,
        })
    }
}

/// Parse a salary bound as a float and truncate toward zero
fn parse_salary(record: &RawRecord, field: &str) -> Result<i64, RecordError> {
    let raw = record.require(field)?;
    let invalid = || RecordError::InvalidNumber {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value.trunc() as i64)
}

/// Year from the first four characters of an ISO-like timestamp
///
/// Shorter values are parsed whole.
fn parse_year(published_at: &str) -> Result<i32, RecordError> {
    let end = published_at
        .char_indices()
        .nth(4)
        .map_or(published_at.len(), |(i, _)| i);

    published_at[..end]
        .parse()
        .map_err(|_| RecordError::InvalidYear(published_at.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str, currency: &str) -> RawRecord {
        [
            ("name", "Rust developer"),
            ("salary_from", from),
            ("salary_to", to),
            ("salary_currency", currency),
            ("area_name", "Moscow"),
            ("published_at", "2022-07-05T18:19:30+0300"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_normalize_rur() {
        let vacancy = VacancyNormalizer::default()
            .normalize(&record("100", "200", "RUR"))
            .unwrap();

        assert_eq!(vacancy.title, "Rust developer");
        assert_eq!(vacancy.salary_from, 100);
        assert_eq!(vacancy.salary_to, 200);
        assert_eq!(vacancy.representative_salary, 150.0);
        assert_eq!(vacancy.city, "Moscow");
        assert_eq!(vacancy.year, 2022);
    }

    #[test]
    fn test_normalize_converts_currency() {
        let vacancy = VacancyNormalizer::default()
            .normalize(&record("1000", "3000", "EUR"))
            .unwrap();

        assert_eq!(vacancy.representative_salary, 59.90 * 4000.0 / 2.0);
    }

    #[test]
    fn test_salary_bounds_truncated() {
        let vacancy = VacancyNormalizer::default()
            .normalize(&record("100.9", "200.7", "RUR"))
            .unwrap();

        assert_eq!(vacancy.salary_from, 100);
        assert_eq!(vacancy.salary_to, 200);
        assert_eq!(vacancy.representative_salary, 150.0);
    }

    #[test]
    fn test_unknown_currency() {
        let result = VacancyNormalizer::default().normalize(&record("1", "2", "BTC"));
        assert!(matches!(result, Err(StatsError::UnknownCurrency(code)) if code == "BTC"));
    }

    #[test]
    fn test_invalid_salary() {
        let result = VacancyNormalizer::default().normalize(&record("abc", "2", "RUR"));
        assert!(matches!(
            result,
            Err(StatsError::MalformedRecord(RecordError::InvalidNumber { .. }))
        ));
    }

    #[test]
    fn test_non_finite_salary() {
        let result = VacancyNormalizer::default().normalize(&record("inf", "2", "RUR"));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_field() {
        let raw: RawRecord = [("name", "QA")].into_iter().collect();
        let result = VacancyNormalizer::default().normalize(&raw);
        assert!(matches!(
            result,
            Err(StatsError::MalformedRecord(RecordError::MissingField(_)))
        ));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2019-01-01T00:00:00+0300"), Ok(2019));
        assert_eq!(parse_year("19"), Ok(19));
        assert!(parse_year("").is_err());
        assert!(parse_year("abcd-01-01").is_err());
    }

    #[test]
    fn test_custom_currency_table() {
        let normalizer = VacancyNormalizer::new(CurrencyTable::empty().with_rate("RUR", 2.0));
        let vacancy = normalizer.normalize(&record("100", "200", "RUR")).unwrap();
        assert_eq!(vacancy.representative_salary, 300.0);
    }
}
