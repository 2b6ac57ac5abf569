//! User-facing error messages.

use super::Command;
use crate::error::BookError;

/// Turn an error into the text shown to the user.
pub fn present_error(error: &BookError) -> String {
    match error {
        BookError::Validation(e) => e.to_string(),
        BookError::NotFound(name) => format!("Contact '{}' not found.", name),
        BookError::Arity {
            command,
            expected,
            actual,
        } => {
            let usage = Command::usage(command).unwrap_or(command.as_str());
            format!(
                "Expected {} argument(s), got {}. Usage: {}",
                expected, actual, usage
            )
        }
        BookError::UnknownCommand(_) => "Invalid command.".to_string(),
        BookError::Io(e) => format!("Storage error: {}", e),
        BookError::Json(e) => format!("Storage file is not valid: {}", e),
    }
}
