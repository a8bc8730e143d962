//! Error types for the episode API client.

use podcastr_core::CoreError;
use thiserror::Error;

/// Errors that can occur when fetching episodes.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// No episode with this ID
    #[error("Episode not found: {0}")]
    NotFound(String),

    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// A record had a malformed field
    #[error("Invalid episode record: {0}")]
    Core(#[from] CoreError),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
