//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while working with an address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// A command received the wrong number of arguments
    #[error("Command '{command}' expects {expected} argument(s), got {actual}")]
    Arity {
        command: String,
        expected: usize,
        actual: usize,
    },

    /// The command name is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Reading or writing the storage file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file could not be parsed or written as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
