//! Header reconciliation against the column schema of a file type.

use std::path::PathBuf;

use tracing::debug;

use oed_model::{CaseInsensitiveSet, EntityType, RowError, ValidationError};
use oed_standards::SchemaStore;

use crate::error::{ProcessError, Result, parse_entity};
use crate::result::{HEADER_ROW, HeaderResult};

/// Where the observed headers come from.
#[derive(Debug, Clone)]
pub enum HeaderSource {
    /// The first line of a CSV file.
    File(PathBuf),
    /// Headers given directly.
    Headers(Vec<String>),
}

impl HeaderSource {
    pub(crate) fn read(self) -> Result<Vec<String>> {
        match self {
            HeaderSource::File(path) => Ok(oed_ingest::read_headers(&path)?),
            HeaderSource::Headers(headers) if headers.is_empty() => Err(
                ProcessError::InvalidInput("expected a non-empty list of headers".to_string()),
            ),
            HeaderSource::Headers(headers) => Ok(headers),
        }
    }
}

impl From<Vec<String>> for HeaderSource {
    fn from(headers: Vec<String>) -> Self {
        HeaderSource::Headers(headers)
    }
}

impl From<PathBuf> for HeaderSource {
    fn from(path: PathBuf) -> Self {
        HeaderSource::File(path)
    }
}

/// Validate the headers of a `schema_type` file.
pub fn validate_headers<'a>(
    store: &'a SchemaStore,
    schema_type: &str,
    source: HeaderSource,
) -> Result<HeaderResults<'a>> {
    let entity = parse_entity(schema_type)?;
    let headers = source.read()?;
    Ok(HeaderResults::new(store, entity, headers))
}

/// Lazy header verdicts: observed headers in input order, then one entry per
/// missing required column in field name order.
#[derive(Debug)]
pub struct HeaderResults<'a> {
    store: &'a SchemaStore,
    entity: EntityType,
    header_line: String,
    observed: std::vec::IntoIter<String>,
    missing: std::vec::IntoIter<String>,
}

impl<'a> HeaderResults<'a> {
    pub(crate) fn new(store: &'a SchemaStore, entity: EntityType, headers: Vec<String>) -> Self {
        let present = CaseInsensitiveSet::new(&headers);
        let mut missing: Vec<String> = store
            .required_columns(entity)
            .into_iter()
            .filter(|name| !present.contains(name))
            .map(ToString::to_string)
            .collect();
        missing.sort();
        debug!(
            %entity,
            headers = headers.len(),
            missing = missing.len(),
            "validating headers"
        );

        Self {
            store,
            entity,
            header_line: headers.join(","),
            observed: headers.into_iter(),
            missing: missing.into_iter(),
        }
    }

    fn observed_result(&self, header: String) -> HeaderResult {
        let schema_type = self.entity.as_str();
        let mut errors = Vec::new();
        if !self.store.is_known_column(&header) {
            errors.push(ValidationError::column(&header));
        }
        if self.store.column(self.entity, &header).is_none() {
            errors.push(ValidationError::schema_column(schema_type, &header));
        }
        errors.sort();

        let exceptions = errors
            .into_iter()
            .map(|error| RowError::new(HEADER_ROW, error))
            .collect();
        let column_pos = column_position(&self.header_line, &header);
        HeaderResult::observed(header, column_pos, exceptions)
    }

    fn missing_result(&self, header: String) -> HeaderResult {
        let error = ValidationError::missing_required(self.entity.as_str(), &header);
        HeaderResult::missing(header, RowError::new(HEADER_ROW, error))
    }
}

impl Iterator for HeaderResults<'_> {
    type Item = HeaderResult;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(header) = self.observed.next() {
            return Some(self.observed_result(header));
        }
        let header = self.missing.next()?;
        Some(self.missing_result(header))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.observed.len() + self.missing.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for HeaderResults<'_> {}

/// 1-based character offset of the first occurrence of `header` in `line`.
pub(crate) fn column_position(line: &str, header: &str) -> usize {
    line.find(header)
        .map_or(0, |idx| line[..idx].chars().count())
        + 1
}
