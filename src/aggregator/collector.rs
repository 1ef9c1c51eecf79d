//! Single-pass fold of raw records into year and city buckets.
//!
//! Every accepted record contributes its representative salary to:
//! - the bucket of its publication year
//! - the bucket of its city
//! - the title-filtered bucket of its year, if the title matches
//!
//! Records with an empty field are skipped without error. Normalization
//! failures (unknown currency, unparsable numbers) abort the run.

use super::buckets::Buckets;
use crate::parser::{RawRecord, Vacancy, VacancyNormalizer};
use crate::utils::error::StatsError;
use log::{debug, info, warn};

/// Raw groupings produced by one aggregation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketSet {
    by_year: Buckets<i32>,
    by_year_filtered: Buckets<i32>,
    by_city: Buckets<String>,
    total: usize,
    matched: usize,
}

impl BucketSet {
    /// Salaries per publication year
    pub fn by_year(&self) -> &Buckets<i32> {
        &self.by_year
    }

    /// Salaries per year for matching titles
    ///
    /// When no title matched, holds a single `0.0` for every year of
    /// [`by_year`](Self::by_year); use [`matched`](Self::matched) to tell
    /// the two cases apart.
    pub fn by_year_filtered(&self) -> &Buckets<i32> {
        &self.by_year_filtered
    }

    /// Salaries per city
    pub fn by_city(&self) -> &Buckets<String> {
        &self.by_city
    }

    /// Number of accepted records
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of accepted records whose title matched the filter
    pub fn matched(&self) -> usize {
        self.matched
    }

    fn add(&mut self, vacancy: Vacancy, title_matches: bool) {
        let salary = vacancy.representative_salary;

        self.by_year.push(vacancy.year, salary);
        if title_matches {
            self.by_year_filtered.push(vacancy.year, salary);
            self.matched += 1;
        }
        self.by_city.push(vacancy.city, salary);
        self.total += 1;
    }

    /// Zero-fill the filtered series when nothing matched
    fn finish(mut self) -> Self {
        if self.by_year_filtered.is_empty() {
            for &year in self.by_year.keys() {
                self.by_year_filtered.push(year, 0.0);
            }
        }
        self
    }
}

/// Folds raw records into a [`BucketSet`]
#[derive(Debug, Clone)]
pub struct VacancyAggregator {
    normalizer: VacancyNormalizer,
    title_filter: String,
}

impl VacancyAggregator {
    /// # Arguments
    /// * `normalizer` - converts raw records, owns the currency table
    /// * `title_filter` - case-sensitive substring selecting the filtered series
    pub fn new(normalizer: VacancyNormalizer, title_filter: impl Into<String>) -> Self {
        Self {
            normalizer,
            title_filter: title_filter.into(),
        }
    }

    /// Aggregate an infallible record sequence
    pub fn aggregate<I>(&self, records: I) -> Result<BucketSet, StatsError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        self.try_aggregate(records.into_iter().map(Ok::<_, StatsError>))
    }

    /// Aggregate a fallible record sequence, such as a [`RecordReader`]
    ///
    /// The sequence is consumed exactly once. The first error, from the
    /// source or from normalization, ends the run.
    ///
    /// [`RecordReader`]: crate::parser::RecordReader
    ///
    /// # Errors
    /// * `StatsError::UnknownCurrency` - a record uses an unlisted currency
    /// * `StatsError::MalformedRecord` - a complete record cannot be parsed
    /// * Any source error, converted into `StatsError`
    pub fn try_aggregate<I, E>(&self, records: I) -> Result<BucketSet, StatsError>
    where
        I: IntoIterator<Item = Result<RawRecord, E>>,
        StatsError: From<E>,
    {
        let mut skipped = 0usize;

        let buckets = records
            .into_iter()
            .try_fold(BucketSet::default(), |mut acc, record| -> Result<_, StatsError> {
                let record = record?;
                if !record.is_complete() {
                    skipped += 1;
                    return Ok(acc);
                }

                let vacancy = self.normalizer.normalize(&record)?;
                let title_matches = vacancy.title.contains(self.title_filter.as_str());
                acc.add(vacancy, title_matches);
                Ok(acc)
            })?
            .finish();

        debug!("Skipped {} records with empty fields", skipped);
        info!(
            "Aggregated {} vacancies across {} years and {} cities",
            buckets.total,
            buckets.by_year.len(),
            buckets.by_city.len()
        );

        if buckets.total == 0 {
            warn!("No complete vacancy records in input");
        } else if buckets.matched == 0 {
            warn!(
                "No vacancy title contains {:?}; filtered series are zero-filled",
                self.title_filter
            );
        }

        Ok(buckets)
    }
}
