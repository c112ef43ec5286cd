//! Conversions from external infrastructure errors into domain errors.

use fixwise_domain::FixwiseError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub FixwiseError);

impl From<InfraError> for FixwiseError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<FixwiseError> for InfraError {
    fn from(value: FixwiseError) -> Self {
        Self(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        let message = value.to_string();
        if let Some(status) = value.status() {
            return Self(FixwiseError::Api { status: status.as_u16(), body: message });
        }
        if value.is_timeout() {
            return Self(FixwiseError::Network(format!("http request timed out: {message}")));
        }
        if value.is_connect() {
            return Self(FixwiseError::Network(format!("http connect failure: {message}")));
        }
        if value.is_builder() || value.is_request() {
            return Self(FixwiseError::Internal(format!("http request invalid: {message}")));
        }
        Self(FixwiseError::Network(format!("http transport failure: {message}")))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(FixwiseError::Internal(format!("failed to decode backend payload: {value}")))
    }
}
