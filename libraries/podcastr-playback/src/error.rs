//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// The controller itself never fails; these are reported by media element
/// implementations and surfaced by the player surface as log entries.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No source has been set on the media element
    #[error("No source loaded")]
    NoSource,

    /// Invalid seek position (seconds)
    #[error("Invalid seek position: {0}s")]
    InvalidSeekPosition(u64),

    /// Media element failure (unresolvable URI, refused autoplay, ...)
    #[error("Media error: {0}")]
    Media(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
