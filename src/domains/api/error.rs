//! Remote API error types.

use thiserror::Error;

/// Result type for remote API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Reasons a remote call produced no data.
///
/// Tools show a single line to the client whatever the variant; the variant
/// itself is kept for logs and tests.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout...).
    #[error("Network error: {0}")]
    Network(String),

    /// The API rejected the credential (401 or 403).
    #[error("Unauthorized ({status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// The addressed entity does not exist (404).
    #[error("Not found: {body}")]
    NotFound { body: String },

    /// Any other non-2xx response.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not valid JSON.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The request could not be built (bad URL, unencodable query).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Classify a non-2xx HTTP status and its body.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::Unauthorized { status, body },
            404 => Self::NotFound { body },
            _ => Self::Status { status, body },
        }
    }

    /// Create a new "invalid request" error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Network("Request timed out".to_string())
        } else if e.is_connect() {
            Self::Network(format!("Connection failed: {}", e))
        } else if e.is_builder() {
            Self::InvalidRequest(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}
