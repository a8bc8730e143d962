/// Core error types for Podcastr
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A publish date could not be parsed
    #[error("Invalid publish date: {0}")]
    InvalidDate(String),

    /// A duration was negative or not a number
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}
