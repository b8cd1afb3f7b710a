//! Whole-file validation: headers first, then the values of every column
//! whose header passed.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, info_span};

use oed_ingest::{Record, Table};
use oed_model::RowError;
use oed_standards::SchemaStore;

use crate::error::{Result, parse_entity};
use crate::headers::HeaderResults;
use crate::result::{ColumnResult, FileReport};
use crate::values::validate_column;

/// Tabular input for whole-file validation.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// A CSV file with a header line.
    File(PathBuf),
    /// In-memory rows sharing one header sequence.
    Rows(Vec<Record>),
}

impl DataSource {
    fn read(&self) -> Result<Table> {
        match self {
            DataSource::File(path) => Ok(oed_ingest::read_table(path)?),
            DataSource::Rows(records) => Ok(Table::from_records(records)?),
        }
    }

    fn path(&self) -> Option<PathBuf> {
        match self {
            DataSource::File(path) => Some(path.clone()),
            DataSource::Rows(_) => None,
        }
    }
}

/// Validate the headers and values of a `schema_type` file or row set.
pub fn validate_file(
    store: &SchemaStore,
    schema_type: &str,
    source: &DataSource,
) -> Result<FileReport> {
    let entity = parse_entity(schema_type)?;
    let source_path = source.path();
    let label = source_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let span = info_span!("validate_file", %entity, source = %label);
    let _guard = span.enter();

    let table = source.read()?;
    let raw_headers = table.headers.clone();

    let mut results = Vec::with_capacity(raw_headers.len());
    for header_result in HeaderResults::new(store, entity, raw_headers.clone()) {
        let mut exceptions: BTreeSet<RowError> = header_result.exceptions.into_iter().collect();
        let mut values = Vec::new();
        if header_result.pass && !header_result.required_but_missing {
            let column = table.column_values(&header_result.header).unwrap_or_default();
            values = validate_column(
                store,
                entity.as_str(),
                &header_result.header,
                column,
                header_result.column_pos,
            )?
            .collect::<Vec<_>>();
            exceptions.extend(values.iter().flat_map(|v| v.exceptions.iter().cloned()));
        }
        results.push(ColumnResult {
            header: header_result.header,
            row: header_result.row,
            column_pos: header_result.column_pos,
            pass: exceptions.is_empty(),
            exceptions: exceptions.into_iter().collect(),
            required_but_missing: header_result.required_but_missing,
            values,
        });
    }

    let pass = results.iter().all(|r| r.pass);
    debug!(
        columns = results.len(),
        rows = table.len(),
        pass,
        "validated file"
    );
    Ok(FileReport {
        entity,
        source: source_path,
        results,
        pass,
        raw_headers,
    })
}
