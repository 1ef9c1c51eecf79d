//! Raw vacancy records: field name to string value.

use crate::utils::error::RecordError;
use std::collections::HashMap;

/// One row of the vacancy export, aligned with the header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
    complete: bool,
}

impl RawRecord {
    /// Zip a row with the header
    ///
    /// Returns `None` when the row has a different number of fields than
    /// the header; such rows are structurally broken and never aggregated.
    pub fn from_row<'a>(
        header: &[String],
        row: impl IntoIterator<Item = &'a str>,
    ) -> Option<Self> {
        let values: Vec<String> = row.into_iter().map(str::to_string).collect();
        if values.len() != header.len() {
            return None;
        }

        // Checked before zipping: a repeated column name shadows earlier values
        let complete = values.iter().all(|value| !value.is_empty());
        let fields = header.iter().cloned().zip(values).collect();

        Some(Self { fields, complete })
    }

    /// Value of a field, if present
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Value of a required field
    ///
    /// # Errors
    /// * `RecordError::MissingField` - field is not in the record
    pub fn require(&self, field: &str) -> Result<&str, RecordError> {
        self.get(field)
            .ok_or_else(|| RecordError::MissingField(field.to_string()))
    }

    /// True if no value of the source row was empty
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields: HashMap<String, String> = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let complete = fields.values().all(|value| !value.is_empty());

        Self { fields, complete }
    }
}
