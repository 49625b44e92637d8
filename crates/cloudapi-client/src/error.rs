//! Error types for the CloudAPI client

use thiserror::Error;

/// Result type alias for CloudAPI client operations
pub type Result<T> = std::result::Result<T, CloudApiError>;

/// Errors that can occur when talking to CloudAPI
#[derive(Debug, Error)]
pub enum CloudApiError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The upstream has no resource matching the request
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API error response
    #[error("API error: {message} (status: {status})")]
    Api {
        /// Error message from API
        message: String,
        /// HTTP status code
        status: u16,
    },

    /// Authentication error
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Request timeout")]
    Timeout,
}

impl CloudApiError {
    /// Whether the upstream reported that nothing matched
    pub fn is_not_found(&self) -> bool {
        matches!(self, CloudApiError::NotFound(_))
    }
}
