//! Types for episode API requests and responses.

use podcastr_core::{
    parse_duration, parse_published_at, CoreError, Episode, EpisodeDetail, EpisodeId,
    EpisodeSummary,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for connecting to the episode API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:3333")
    pub url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// =============================================================================
// Listing Queries
// =============================================================================

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Parameters for `GET /episodes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub limit: usize,
    pub sort_field: String,
    pub sort_order: SortOrder,
}

impl ListQuery {
    /// Newest `limit` episodes first.
    pub fn latest(limit: usize) -> Self {
        Self {
            limit,
            sort_field: "published_at".to_string(),
            sort_order: SortOrder::Desc,
        }
    }

    /// Query-string pairs in json-server syntax.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("_limit", self.limit.to_string()),
            ("_sort", self.sort_field.clone()),
            ("_order", self.sort_order.as_str().to_string()),
        ]
    }
}

// =============================================================================
// Raw Records
// =============================================================================

/// Record identifier; json-server accepts both strings and numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for EpisodeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(id) => EpisodeId::new(id),
            RawId::Number(id) => EpisodeId::new(id.to_string()),
        }
    }
}

/// Duration as stored by the API: a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(f64),
    Text(String),
}

impl RawDuration {
    /// Whole seconds
    pub fn to_secs(&self) -> Result<u64, CoreError> {
        match self {
            RawDuration::Number(secs) if secs.is_finite() && *secs >= 0.0 => {
                Ok(secs.floor() as u64)
            }
            RawDuration::Number(secs) => Err(CoreError::InvalidDuration(secs.to_string())),
            RawDuration::Text(text) => parse_duration(text),
        }
    }
}

/// Audio file attached to an episode.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFile {
    pub url: String,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    pub duration: RawDuration,
}

/// An episode as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
    pub id: RawId,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    pub published_at: String,
    pub file: RawFile,
}

impl RawEpisode {
    /// Listing fields, with the date and duration parsed.
    pub fn into_summary(self) -> Result<EpisodeSummary, CoreError> {
        self.into_detail().map(|detail| detail.summary)
    }

    /// All fields, with the date and duration parsed.
    pub fn into_detail(self) -> Result<EpisodeDetail, CoreError> {
        let published_at = parse_published_at(&self.published_at)?;
        let duration_secs = self.file.duration.to_secs()?;

        Ok(EpisodeDetail {
            summary: EpisodeSummary {
                id: self.id.into(),
                published_at,
                episode: Episode {
                    title: self.title,
                    members: self.members,
                    thumbnail: self.thumbnail,
                    duration_secs,
                    url: self.file.url,
                },
            },
            description: self.description,
        })
    }
}
