/// Error types for backend API access.
use thiserror::Error;

/// Main error type for API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("API returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code if the backend answered with an error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Type alias for Results using ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
