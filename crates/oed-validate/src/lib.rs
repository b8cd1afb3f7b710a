//! OED exposure data validation.
//!
//! Three layers, each built on a shared, read-only [`SchemaStore`]:
//!
//! - **Headers**: observed headers against the file type's columns, plus a
//!   synthetic entry for every missing required column.
//! - **Values**: nullability, declared type and range of each value of a column.
//! - **Files**: headers, then values of every column whose header passed.
//!
//! Data errors are collected into result values; [`ProcessError`] is reserved
//! for unusable input.

mod error;
mod file;
mod headers;
mod result;
mod values;

use std::sync::Arc;

use oed_model::Value;
use oed_standards::SchemaStore;

pub use error::{ProcessError, Result};
pub use file::{DataSource, validate_file};
pub use headers::{HeaderResults, HeaderSource, validate_headers};
pub use result::{ColumnResult, FileReport, HEADER_ROW, HeaderResult, ValueResult};
pub use values::{ValueResults, validate_column};

/// Validator bound to one schema store.
#[derive(Debug, Clone)]
pub struct Validator {
    store: Arc<SchemaStore>,
}

impl Validator {
    pub fn new(store: Arc<SchemaStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SchemaStore {
        &self.store
    }

    pub fn validate_headers(
        &self,
        schema_type: &str,
        source: impl Into<HeaderSource>,
    ) -> Result<HeaderResults<'_>> {
        validate_headers(&self.store, schema_type, source.into())
    }

    pub fn validate_column(
        &self,
        schema_type: &str,
        header: &str,
        values: Vec<Value>,
    ) -> Result<ValueResults<'_>> {
        validate_column(&self.store, schema_type, header, values, None)
    }

    pub fn validate(&self, schema_type: &str, source: &DataSource) -> Result<FileReport> {
        validate_file(&self.store, schema_type, source)
    }
}
