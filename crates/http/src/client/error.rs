//! Client error types

use thiserror::Error;

/// Client error types
///
/// Two families exist: [`ClientError::Request`] covers transport failures
/// (network unreachable, undecodable body), everything else is an
/// application-level error carried in a well-formed non-2xx response. Both
/// render a human-readable message suitable for direct display in a form.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("{0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Bad request
    #[error("{0}")]
    BadRequest(String),

    /// Forbidden
    #[error("{0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// The message callers are expected to surface verbatim
    pub fn message(&self) -> String {
        match self {
            Self::Request(e) => format!("Network error: {e}"),
            Self::ServerError { message, .. } => message.clone(),
            Self::AuthenticationFailed(m)
            | Self::NotFound(m)
            | Self::BadRequest(m)
            | Self::Forbidden(m)
            | Self::Configuration(m) => m.clone(),
            Self::Serialization(e) => e.to_string(),
        }
    }
}
