//! Application-level errors

use thiserror::Error;

/// Application errors cover the I/O boundary around the domain layer.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("pattern cannot be audited: {0}")]
    Audit(#[from] regex::Error),

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
