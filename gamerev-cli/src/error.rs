use gamerev_db::{OperationError, SchemaError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Opening or migrating the database failed
    #[error("Database error: {0}")]
    Schema(#[from] SchemaError),

    /// A catalog operation was refused or failed
    #[error("{0}")]
    Operation(#[from] OperationError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
