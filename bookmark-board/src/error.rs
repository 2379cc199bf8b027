//! Error types for the bookmark board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
///
/// Store mutations never produce `ColumnNotFound`/`RowNotFound`: a missing id
/// turns a mutation into a no-op. Only the explicit lookups (`GetColumn`,
/// `GetRow`) report them.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Row not found
    #[error("row not found: {id}")]
    RowNotFound { id: String },

    /// Invalid field value (form validation)
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// The persisted snapshot could not be decoded
    #[error("corrupt snapshot under key '{key}': {message}")]
    CorruptSnapshot { key: String, message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {message}")]
    Config { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a corrupt snapshot error
    pub fn corrupt_snapshot(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptSnapshot {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Check if this error reports a missing column or row
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ColumnNotFound { .. } | Self::RowNotFound { .. })
    }
}

impl From<figment::Error> for BoardError {
    fn from(error: figment::Error) -> Self {
        Self::Config {
            message: error.to_string(),
        }
    }
}
