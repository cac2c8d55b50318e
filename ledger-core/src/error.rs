//! Error types for the ledger

use crate::types::Field;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
#[derive(Error, Debug)]
pub enum Error {
    /// A required form field is empty
    #[error("Missing field: {0}")]
    MissingField(Field),

    /// Amount text is present but not an acceptable decimal
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date text is present but not an ISO calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Metrics registry error
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error is a form rejection (silently ignored by the UI)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::MissingField(_) | Error::InvalidAmount(_) | Error::InvalidDate(_)
        )
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
