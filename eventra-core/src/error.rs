//! Error types for Eventra.

use thiserror::Error;

use crate::validate::FieldError;

/// Errors that can occur in Eventra operations.
#[derive(Error, Debug)]
pub enum EventraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event data: {}", describe(.0))]
    Validation(Vec<FieldError>),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for Eventra operations.
pub type EventraResult<T> = Result<T, EventraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = EventraError::Validation(vec![
            FieldError::new("title", "Required"),
            FieldError::new("date", "Expected a date in YYYY-MM-DD format"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid event data: title: Required; date: Expected a date in YYYY-MM-DD format"
        );
    }
}
