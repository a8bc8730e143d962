//! Core types for playback management

use podcastr_core::Episode;
use serde::{Deserialize, Serialize};

/// What the controller currently holds
///
/// `Idle` has no playing flag on purpose: with nothing queued there is
/// nothing to play, so `is_playing` always reads false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueState {
    /// Nothing queued
    Idle,

    /// A non-empty queue with a valid index
    Loaded {
        /// Episodes in play order
        queue: Vec<Episode>,

        /// Position of the current episode (always `< queue.len()`)
        index: usize,

        /// Whether audio should be advancing
        playing: bool,
    },
}

impl QueueState {
    /// Current episode, if any
    pub fn current(&self) -> Option<&Episode> {
        match self {
            QueueState::Idle => None,
            QueueState::Loaded { queue, index, .. } => queue.get(*index),
        }
    }
}

/// Initial listener preferences for a new controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Start with loop mode on (default: false)
    #[serde(default)]
    pub looping: bool,

    /// Start with shuffle mode on (default: false)
    #[serde(default)]
    pub shuffling: bool,

    /// Fixed seed for shuffle picks (default: entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Owned, read-only projection of the playback state
///
/// Views render from a snapshot and never hold the controller lock while
/// doing so.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Episodes in play order
    pub queue: Vec<Episode>,

    /// Position of the current episode (0 when the queue is empty)
    pub current_index: usize,

    /// Episode at `current_index`
    pub current_episode: Option<Episode>,

    /// Whether audio should be advancing
    pub is_playing: bool,

    /// Whether the current episode repeats on completion
    pub is_looping: bool,

    /// Whether "next" picks a random index
    pub is_shuffling: bool,

    /// An earlier episode exists
    pub has_previous: bool,

    /// A next episode exists (always true while shuffling)
    pub has_next: bool,
}
