//! Validation result types.

use std::path::PathBuf;

use serde::Serialize;

use oed_model::{EntityType, RowError, Value};

/// Row of the header line in every result.
pub const HEADER_ROW: usize = 1;

/// Verdict for one observed header, or for a required header that is missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderResult {
    pub header: String,
    pub row: usize,
    /// 1-based character offset of the header in the comma-joined header
    /// line; `None` for a missing required column.
    pub column_pos: Option<usize>,
    pub exceptions: Vec<RowError>,
    pub pass: bool,
    pub required_but_missing: bool,
}

impl HeaderResult {
    pub(crate) fn observed(header: String, column_pos: usize, exceptions: Vec<RowError>) -> Self {
        Self {
            header,
            row: HEADER_ROW,
            column_pos: Some(column_pos),
            pass: exceptions.is_empty(),
            exceptions,
            required_but_missing: false,
        }
    }

    pub(crate) fn missing(header: String, exception: RowError) -> Self {
        Self {
            header,
            row: HEADER_ROW,
            column_pos: None,
            exceptions: vec![exception],
            pass: false,
            required_but_missing: true,
        }
    }
}

/// Verdict for one value of a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueResult {
    pub header: String,
    /// The coerced value.
    pub value: Value,
    pub row: usize,
    pub column_pos: Option<usize>,
    pub exceptions: Vec<RowError>,
    pub pass: bool,
}

/// A header result merged with the value results of its column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnResult {
    pub header: String,
    pub row: usize,
    pub column_pos: Option<usize>,
    /// Header and value exceptions, deduplicated and ordered by row.
    pub exceptions: Vec<RowError>,
    pub pass: bool,
    pub required_but_missing: bool,
    pub values: Vec<ValueResult>,
}

/// Result of validating a whole file or row set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub entity: EntityType,
    /// File path, or `None` for in-memory rows.
    pub source: Option<PathBuf>,
    pub results: Vec<ColumnResult>,
    pub pass: bool,
    pub raw_headers: Vec<String>,
}

impl FileReport {
    pub fn failures(&self) -> impl Iterator<Item = &ColumnResult> {
        self.results.iter().filter(|r| !r.pass)
    }

    pub fn exception_count(&self) -> usize {
        self.results.iter().map(|r| r.exceptions.len()).sum()
    }

    /// `(results, overall pass, raw headers)`.
    pub fn into_parts(self) -> (Vec<ColumnResult>, bool, Vec<String>) {
        (self.results, self.pass, self.raw_headers)
    }
}
