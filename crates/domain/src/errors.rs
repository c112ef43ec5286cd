//! Error types used throughout the availability engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Fixwise
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FixwiseError {
    /// Transport-level failure: the backend never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error (status {status}): {body}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body as provided by the server.
        body: String,
    },

    /// Configuration error: missing or malformed settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller-supplied input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Fixwise operations
pub type Result<T> = std::result::Result<T, FixwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = FixwiseError::Api { status: 422, body: "slot already booked".into() };
        let rendered = err.to_string();
        assert!(rendered.contains("422"));
        assert!(rendered.contains("slot already booked"));
    }

    #[test]
    fn network_and_api_errors_are_distinct_variants() {
        let network = FixwiseError::Network("connection refused".into());
        assert!(matches!(network, FixwiseError::Network(_)));
        let api = FixwiseError::Api { status: 500, body: String::new() };
        assert!(!matches!(api, FixwiseError::Network(_)));
    }
}
