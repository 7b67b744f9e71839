//! Error types for value normalization.

use thiserror::Error;

/// Errors raised by a normalization rule that cannot produce a canonical value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Phone value does not reduce to a 10-digit (or `18`-prefixed 11-digit) number.
    #[error("malformed phone number '{raw}' (digits: '{digits}')")]
    MalformedPhone { raw: String, digits: String },
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizeError::MalformedPhone {
            raw: "555-01".to_string(),
            digits: "55501".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed phone number '555-01' (digits: '55501')"
        );
    }
}
