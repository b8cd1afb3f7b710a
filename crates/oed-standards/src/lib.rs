#![deny(unsafe_code)]

pub mod columns;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod methods;
pub mod paths;
pub mod query;
pub mod registry;
pub mod sample;
pub mod sql;
pub mod store;

pub use crate::error::{SampleError, StandardsError};
pub use crate::methods::{MethodRegistry, SamplingFn, ValidationFn};
pub use crate::paths::{STANDARDS_ENV_VAR, resolve_standards_dir, standards_root};
pub use crate::manifest::{FileKind, Manifest};
pub use crate::query::ColumnQuery;
pub use crate::registry::{
    VerifySummary, load_default_schema_store, verify_and_load, verify_and_load_with,
};
pub use crate::sample::{
    DEFAULT_SAMPLE_SIZE, DEFAULT_STRING_WIDTH, sample_column, sample_column_with_rng,
};
pub use crate::store::SchemaStore;
