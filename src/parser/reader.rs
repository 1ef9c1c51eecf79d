//! CSV reader producing header-aligned raw records.
//!
//! Rows whose field count differs from the header's are dropped here.
//! Rows with empty values pass through and are filtered by the aggregator.

use super::record::RawRecord;
use crate::utils::error::StatsError;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Lazy, single-pass iterator over the records of a CSV export
pub struct RecordReader<R: Read> {
    header: Vec<String>,
    rows: csv::StringRecordsIntoIter<R>,
    dropped: usize,
}

impl RecordReader<File> {
    /// Open a CSV file and read its header
    ///
    /// # Errors
    /// * `StatsError::Read` - file cannot be opened or the header is unreadable
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StatsError> {
        let path = path.as_ref();
        debug!("Opening vacancy export: {}", path.display());

        let reader = builder().from_path(path)?;
        Self::from_csv(reader)
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap any reader (file, in-memory buffer, stdin)
    pub fn from_reader(rdr: R) -> Result<Self, StatsError> {
        Self::from_csv(builder().from_reader(rdr))
    }

    fn from_csv(mut reader: csv::Reader<R>) -> Result<Self, StatsError> {
        let header: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == 0 {
                    name.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    name.to_string()
                }
            })
            .collect();

        debug!("CSV header has {} fields: {:?}", header.len(), header);

        Ok(Self {
            header,
            rows: reader.into_records(),
            dropped: 0,
        })
    }

    /// Column names, in file order
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Rows dropped so far for having the wrong number of fields
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord, StatsError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(e) => return Some(Err(StatsError::Read(e))),
            };

            match RawRecord::from_row(&self.header, row.iter()) {
                Some(record) => return Some(Ok(record)),
                None => {
                    self.dropped += 1;
                    debug!(
                        "Dropping row with {} fields (header has {})",
                        row.len(),
                        self.header.len()
                    );
                }
            }
        }
    }
}

/// Lenient on row length; the shape check happens in `RawRecord::from_row`
fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}
