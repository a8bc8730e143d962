//! Domain types: episodes and their identifiers

mod episode;
mod ids;

pub use episode::{Episode, EpisodeDetail, EpisodeSummary};
pub use ids::EpisodeId;
