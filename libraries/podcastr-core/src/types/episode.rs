/// Episode domain types
use crate::format::{format_duration, format_published_at};
use crate::types::EpisodeId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A playable episode
///
/// This is the value the playback controller copies into its queue. It has
/// no identity of its own; two episodes with the same fields are the same
/// episode as far as playback is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode title
    pub title: String,

    /// Free-form credit list
    pub members: String,

    /// Cover image URI
    pub thumbnail: String,

    /// Length in whole seconds
    pub duration_secs: u64,

    /// Audio resource URI
    pub url: String,
}

impl Episode {
    /// Create a new episode
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration_secs: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration_secs,
            url: url.into(),
        }
    }

    /// Episode length formatted as `HH:MM:SS`
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_secs)
    }
}

/// An episode as it appears in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Repository-assigned identifier
    pub id: EpisodeId,

    /// When the episode was published
    pub published_at: NaiveDateTime,

    /// Playable fields
    pub episode: Episode,
}

impl EpisodeSummary {
    /// Publish date formatted for display (`8 jan 21`)
    pub fn published_label(&self) -> String {
        format_published_at(&self.published_at)
    }
}

/// An episode with its full show notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeDetail {
    /// Listing fields
    pub summary: EpisodeSummary,

    /// HTML show notes
    pub description: String,
}

impl EpisodeDetail {
    /// Repository-assigned identifier
    pub fn id(&self) -> &EpisodeId {
        &self.summary.id
    }

    /// Playable fields
    pub fn episode(&self) -> &Episode {
        &self.summary.episode
    }
}
