//! Client error types.
//!
//! Transport-level faults only. A response with a non-success status is not
//! an error; it is reported through [`crate::types::RequestOutcome`].

use std::fmt;

/// Client errors.
#[derive(Debug)]
pub enum ClientError {
    /// HTTP request failed (connection refused, reset, TLS, ...).
    Request(reqwest::Error),

    /// Failed to deserialize a success response body.
    Deserialization(String),

    /// Invalid configuration.
    InvalidConfig(String),

    /// Could not build an endpoint URL.
    InvalidUrl(String),

    /// Request timeout.
    Timeout,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "HTTP request failed: {}", e),
            Self::Deserialization(msg) => write!(f, "deserialization failed: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Self::InvalidUrl(msg) => write!(f, "invalid url: {}", msg),
            Self::Timeout => write!(f, "request timeout"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Request(err)
        }
    }
}
