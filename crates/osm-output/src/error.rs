//! Output error types.

use std::path::PathBuf;
use thiserror::Error;

/// Sink operation error.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record could not be serialized to JSON.
    #[error("Failed to serialize record data")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete write of {target_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document store error.
    #[error("Document store error: {source}")]
    Store {
        #[from]
        source: rusqlite::Error,
    },

    /// Collection name is not a plain identifier.
    #[error("Invalid collection name '{name}'")]
    InvalidCollection { name: String },

    /// Records were inserted after the sink was finished.
    #[error("Sink already finished")]
    AlreadyFinished,
}

impl OutputError {
    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { .. } | Self::AtomicWriteFailed { .. } => {
                Some("Check disk space and that you can write to the output location.".into())
            }
            Self::InvalidCollection { .. } => Some(
                "Use letters, digits and underscores only, starting with a letter or underscore."
                    .into(),
            ),
            Self::Store { .. } => Some("Check that the store file is a SQLite database.".into()),
            Self::Serialization { .. } | Self::AlreadyFinished => None,
        }
    }
}

/// Result type alias for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OutputError::InvalidCollection {
            name: "drop table".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid collection name 'drop table'");
        assert!(err.suggestion().is_some());
        assert!(OutputError::AlreadyFinished.suggestion().is_none());
    }
}
