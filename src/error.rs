//! Error types for chatterbox.

use thiserror::Error;

/// Errors raised while parsing, executing or persisting commands.
///
/// Every variant is recoverable at the command loop: the session reports the
/// message and keeps reading input.
#[derive(Debug, Error)]
pub enum ChatterboxError {
    /// A task was created with an empty description.
    #[error("Error: No input for task")]
    NoInput,

    /// The input line did not start with a known keyword.
    #[error("Error: Unknown command")]
    UnknownCommand,

    /// A required marker or field was absent or malformed.
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// The index was not a usable number.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Markers appeared in the wrong order.
    #[error("Wrong argument order: {0}")]
    WrongOrder(String),

    /// The 1-based index does not refer to a task.
    #[error("No task at index {index} (list has {size} tasks)")]
    IndexOutOfRange {
        /// Index as typed by the user.
        index: usize,
        /// Number of tasks in the list.
        size: usize,
    },

    /// A file or tag could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored data could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChatterboxError {
    /// Whether this error means "nothing stored yet" rather than a failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ChatterboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = ChatterboxError::MissingParameter("Deadline date".to_string());
        assert_eq!(err.to_string(), "Missing parameter: Deadline date");
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = ChatterboxError::IndexOutOfRange { index: 7, size: 2 };
        assert_eq!(err.to_string(), "No task at index 7 (list has 2 tasks)");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ChatterboxError::NotFound("tasks.txt".to_string()).is_not_found());
        assert!(!ChatterboxError::UnknownCommand.is_not_found());
    }
}
