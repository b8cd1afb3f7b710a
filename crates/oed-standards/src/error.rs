#![deny(unsafe_code)]

use std::path::PathBuf;

use oed_model::{EntityType, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("missing required role in manifest: {role}")]
    MissingRole { role: String },

    #[error("duplicate role in manifest: {role}")]
    DuplicateRole { role: String },

    #[error("invalid sha256 for {path}: {message}")]
    InvalidSha256 { path: PathBuf, message: String },

    #[error("missing file listed in manifest: {path}")]
    MissingFile { path: PathBuf },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("invalid column definition at {path}:{line}: {message}")]
    InvalidColumn {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("duplicate column \"{field_name}\" in the {entity} schema")]
    DuplicateColumn {
        entity: EntityType,
        field_name: String,
    },

    #[error("column \"{field_name}\" in the {entity} schema names unregistered {kind} method \"{method}\"")]
    UnknownMethod {
        entity: EntityType,
        field_name: String,
        kind: &'static str,
        method: String,
    },

    #[error("column \"{field_name}\" in the {entity} schema has an invalid range: {message}")]
    InvalidRange {
        entity: EntityType,
        field_name: String,
        message: String,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the value sampler.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error(transparent)]
    Lookup(#[from] ValidationError),

    #[error("sampling method \"{0}\" is not registered")]
    UnknownMethod(String),
}
