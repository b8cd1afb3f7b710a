//! CSV file reading.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

use super::data::Table;

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(file))
}

fn parse_error(path: &Path, err: &csv::Error) -> IngestError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => IngestError::RaggedRow {
            path: path.to_path_buf(),
            line: pos.as_ref().map_or(0, csv::Position::line),
            expected: *expected_len as usize,
            found: *len as usize,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        },
    }
}

/// Normalizes a header value by stripping a byte-order mark and whitespace.
fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

fn headers_of(reader: &mut csv::Reader<File>, path: &Path) -> Result<Vec<String>> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| parse_error(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Reads the header line of a CSV file.
pub fn read_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = open_reader(path)?;
    headers_of(&mut reader, path)
}

/// Reads a CSV file into headers and rows. Empty cells become `None`.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = open_reader(path)?;
    let headers = headers_of(&mut reader, path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, &e))?;
        rows.push(
            record
                .iter()
                .map(|cell| Some(cell.to_string()).filter(|c| !c.is_empty()))
                .collect(),
        );
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read CSV table"
    );
    Ok(Table { headers, rows })
}
