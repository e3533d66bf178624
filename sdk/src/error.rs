//! SDK error types.
//!
//! Provides error types for value-level SDK operations.

/// SDK errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// Invalid bid amount.
    #[error("invalid bid amount: {0}")]
    InvalidAmount(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SdkError::InvalidAmount("negative value".to_string());
        assert_eq!(err.to_string(), "invalid bid amount: negative value");
    }

    #[test]
    fn test_error_deserialization() {
        let err = SdkError::Deserialization("missing field `hand`".to_string());
        assert_eq!(
            err.to_string(),
            "deserialization error: missing field `hand`"
        );
    }
}
