/*
[INPUT]:  Error sources (HTTP, API, serialization, signing, WebSocket)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the HyperETH adapter
#[derive(Error, Debug)]
pub enum HyperethError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Message or action signing failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// WebSocket transport error
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Server rejected a WebSocket post request
    #[error("WebSocket request rejected: {0}")]
    WsRequest(String),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request timed out
    #[error("Request timed out after {duration}s")]
    Timeout { duration: u64 },
}

impl HyperethError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            HyperethError::Http(_)
            | HyperethError::Timeout { .. }
            | HyperethError::WebSocket(_)
            | HyperethError::InvalidResponse(_) => true,
            HyperethError::Api { status, .. } => {
                matches!(*status, 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    /// Check if error indicates the API key or signature was rejected
    pub fn is_auth_error(&self) -> bool {
        match self {
            HyperethError::Api { status, .. } => matches!(*status, 401 | 403),
            HyperethError::Signing(_) => true,
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        HyperethError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for HyperETH operations
pub type Result<T> = std::result::Result<T, HyperethError>;
