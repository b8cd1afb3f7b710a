//! Process errors: caller misuse and unreadable input, as opposed to data errors.

use oed_ingest::IngestError;
use oed_model::EntityType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(
        "\"{0}\" is not a valid OED file type - expected \"acc\", \"loc\", \"reinsinfo\" or \"reinsscope\""
    )]
    UnknownFileType(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The column exists but declares no data type to validate against.
    #[error("column \"{header}\" of the OED \"{entity}\" schema has no declared data type")]
    UnsupportedDataType { entity: EntityType, header: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type Result<T> = std::result::Result<T, ProcessError>;

/// Parse a file type name, rejecting the master schema and unknown names.
pub(crate) fn parse_entity(schema_type: &str) -> Result<EntityType> {
    schema_type
        .parse()
        .map_err(|_| ProcessError::UnknownFileType(schema_type.to_string()))
}
