//! Validation error values.
//!
//! Data errors are ordinary values collected into validation results; they
//! are never raised. Each kind carries a stable code and a short
//! description, and each error carries a message naming the offending
//! header or value.

use serde::{Serialize, Serializer};
use std::fmt;

/// Kind of data error, with its stable OED error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// Generic schema error, raised for lookups against the master schema.
    Oed,
    NonOedSchemaAndColumn,
    NonOedSchema,
    NonOedColumn,
    NonOedSchemaColumn,
    MissingRequiredColumn,
    InvalidDataType,
    NullDataInNonNullColumn,
    DataOutOfRange,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Oed => "E200",
            ErrorKind::NonOedSchemaAndColumn => "E301",
            ErrorKind::NonOedSchema => "E302",
            ErrorKind::NonOedColumn => "E303",
            ErrorKind::NonOedSchemaColumn => "E304",
            ErrorKind::MissingRequiredColumn => "E331",
            ErrorKind::InvalidDataType => "E351",
            ErrorKind::NullDataInNonNullColumn => "E361",
            ErrorKind::DataOutOfRange => "E371",
        }
    }

    /// Error name as printed in report lines.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Oed => "OedError",
            ErrorKind::NonOedSchemaAndColumn => "NonOedSchemaAndColumnError",
            ErrorKind::NonOedSchema => "NonOedSchemaError",
            ErrorKind::NonOedColumn => "NonOedColumnError",
            ErrorKind::NonOedSchemaColumn => "NonOedSchemaColumnError",
            ErrorKind::MissingRequiredColumn => "MissingRequiredColumnError",
            ErrorKind::InvalidDataType => "InvalidDataTypeError",
            ErrorKind::NullDataInNonNullColumn => "NullDataInNonNullColumnError",
            ErrorKind::DataOutOfRange => "DataOutOfRangeError",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::Oed => "Base OED error",
            ErrorKind::NonOedSchemaAndColumn => "Not a valid OED schema and column",
            ErrorKind::NonOedSchema => "Not a valid OED schema type",
            ErrorKind::NonOedColumn => "Not a valid column in any OED schema",
            ErrorKind::NonOedSchemaColumn => "Not a valid column in the given OED schema",
            ErrorKind::MissingRequiredColumn => "Missing required column in file",
            ErrorKind::InvalidDataType => "Invalid data type(s) in column",
            ErrorKind::NullDataInNonNullColumn => "Null data found in non-null column",
            ErrorKind::DataOutOfRange => "Out of range data found in column",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A data error: kind plus message. Equality and ordering use both fields,
/// so repeated identical errors collapse in sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    pub fn master_lookup() -> Self {
        Self::new(
            ErrorKind::Oed,
            "Column schemas are only available for specific file schema types - \
             \"acc\", \"loc\", \"reinsinfo\" or \"reinsscope\"",
        )
    }

    pub fn schema_and_column(schema_type: &str, header: &str) -> Self {
        Self::new(
            ErrorKind::NonOedSchemaAndColumn,
            format!(
                "\"{schema_type}\" is not a valid OED schema type and \"{header}\" is not a valid column in any OED schema"
            ),
        )
    }

    pub fn schema(schema_type: &str) -> Self {
        Self::new(
            ErrorKind::NonOedSchema,
            format!("\"{schema_type}\" is not a valid OED schema type"),
        )
    }

    pub fn column(header: &str) -> Self {
        Self::new(
            ErrorKind::NonOedColumn,
            format!("\"{header}\" is not a valid column in any OED schema"),
        )
    }

    pub fn schema_column(schema_type: &str, header: &str) -> Self {
        Self::new(
            ErrorKind::NonOedSchemaColumn,
            format!("\"{header}\" is an invalid column in the OED \"{schema_type}\" schema"),
        )
    }

    pub fn missing_required(schema_type: &str, header: &str) -> Self {
        Self::new(
            ErrorKind::MissingRequiredColumn,
            format!(
                "\"{header}\" is a required column in an OED \"{schema_type}\" file but is missing"
            ),
        )
    }

    pub fn null_value(header: &str) -> Self {
        Self::new(
            ErrorKind::NullDataInNonNullColumn,
            format!("Null value in \"{header}\" - this is a non-null column"),
        )
    }

    pub fn invalid_data_type(value: &str, header: &str, expected: &str, found: &str) -> Self {
        Self::new(
            ErrorKind::InvalidDataType,
            format!(
                "Invalid data type for value \"{value}\" in \"{header}\" - expected type \"{expected}\", found type \"{found}\""
            ),
        )
    }

    pub fn out_of_range(value: &str, header: &str) -> Self {
        Self::new(
            ErrorKind::DataOutOfRange,
            format!("Invalid value \"{value}\" in \"{header}\" - check the column or data type range"),
        )
    }
}

/// A data error located at a 1-based file row (the header row is row 1).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RowError {
    pub row: usize,
    pub error: ValidationError,
}

impl RowError {
    pub fn new(row: usize, error: ValidationError) -> Self {
        Self { row, error }
    }
}
