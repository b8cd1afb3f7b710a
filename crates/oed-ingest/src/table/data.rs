//! Column-addressable table of optional cell values.

use oed_model::Value;

use crate::error::{IngestError, Result};
use crate::record::Record;

/// Headers plus uniform rows. Missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build a table from in-memory records.
    ///
    /// The records must be non-empty and share the header set of the first
    /// record, in any order. Columns follow the first record's order.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        let Some(first) = records.first() else {
            return Err(IngestError::NoRows);
        };
        let headers: Vec<String> = first.headers().map(ToString::to_string).collect();
        let mut rows = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.len() != headers.len() || !headers.iter().all(|h| record.contains(h)) {
                return Err(IngestError::NonUniformRows { index });
            }
            rows.push(
                headers
                    .iter()
                    .map(|h| record.get(h).map(ToString::to_string))
                    .collect(),
            );
        }
        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Cells of one column in row order, or `None` for an unknown header.
    pub fn column(&self, header: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(header)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).and_then(|cell| cell.as_deref()))
                .collect(),
        )
    }

    /// Cells of one column as uncoerced values; missing cells are [`Value::Null`].
    pub fn column_values(&self, header: &str) -> Option<Vec<Value>> {
        self.column(header).map(|cells| {
            cells
                .into_iter()
                .map(|cell| cell.map(Value::from).unwrap_or_default())
                .collect()
        })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
