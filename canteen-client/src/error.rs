//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Success status, but the body is not the expected JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status; carries the response body
    #[error("Internal error: {0}")]
    Internal(String),

    /// Session storage content could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// Response body (or description) carried by the error, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::InvalidResponse(s)
            | Self::Forbidden(s)
            | Self::NotFound(s)
            | Self::Validation(s)
            | Self::Internal(s) => Some(s),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
