/// ID types for Podcastr entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Episode identifier, as assigned by the content API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Create a new episode ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EpisodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
