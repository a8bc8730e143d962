//! Front-end error types
use podcastr_client::ClientError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not load episodes: {0}")]
    Client(#[from] ClientError),

    #[error("No episode at position {index} (listing has {length})")]
    RowOutOfRange { index: usize, length: usize },

    #[error("No episodes to play")]
    NothingToPlay,
}
