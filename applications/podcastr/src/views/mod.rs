//! Listing views
//!
//! View models for the home page and the episode page. They fetch through an
//! [`EpisodeRepository`](podcastr_client::EpisodeRepository) and hand a queue
//! to the shared [`PlayerContext`](podcastr_playback::PlayerContext) when the
//! listener picks an episode.

mod episode;
mod home;

pub use episode::{strip_html, EpisodeDetailView};
pub use home::{EpisodeRow, HomeView};
