//! Error types for tabular input.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading tabular input.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has a blank header line.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A data row does not have one field per header.
    #[error("row on line {line} of {path} has {found} fields, expected {expected}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    // === In-Memory Row Errors ===
    /// No rows were supplied.
    #[error("no rows to read")]
    NoRows,

    /// A record's headers differ from those of the first record.
    #[error("row {index} does not have the same headers as the first row")]
    NonUniformRows { index: usize },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for tabular input operations.
pub type Result<T> = std::result::Result<T, IngestError>;
