use thiserror::Error;

/// Errors raised at the record store boundary.
///
/// Validation, pattern and import-format errors are recoverable: commands
/// report them and leave the store untouched. Storage and IO errors are
/// propagated to the caller of the mutation.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Title and Date are required.")]
    MissingRequiredFields,

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("record with ID {0} not found")]
    NotFound(String),

    #[error("invalid regex pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid JSON format: top-level value must be an array")]
    ImportFormat,

    #[error("invalid JSON file: {0}")]
    InvalidJson(serde_json::Error),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
