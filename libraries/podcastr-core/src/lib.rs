//! Podcastr Core
//!
//! Platform-agnostic episode types and presentation helpers shared by the
//! playback controller, the content client and the front-end views.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Episode`, `EpisodeSummary`, `EpisodeDetail`, `EpisodeId`
//! - **Formatting**: duration strings (`HH:MM:SS`) and publish dates
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{format_duration, Episode};
//!
//! let episode = Episode::new(
//!     "Faladev #30",
//!     "Diego e Richard",
//!     "https://cdn.example.com/faladev30.jpg",
//!     3981,
//!     "https://cdn.example.com/faladev30.m4a",
//! );
//!
//! assert_eq!(format_duration(episode.duration_secs), "01:06:21");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod types;

pub use error::{CoreError, Result};
pub use format::{format_duration, format_published_at, parse_duration, parse_published_at};
pub use types::{Episode, EpisodeDetail, EpisodeId, EpisodeSummary};
