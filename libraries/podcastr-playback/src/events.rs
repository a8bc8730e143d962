//! Player Events
//!
//! Every controller action records the state changes it caused. The player
//! surface drains them to decide which media commands to issue; nothing else
//! should consume them.

use serde::{Deserialize, Serialize};

/// Changes emitted by the playback controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The queue was replaced by `play_queue` or `play_single`
    QueueReplaced {
        /// New queue length
        length: usize,
    },

    /// A (possibly identical) episode was selected as current
    ///
    /// Shuffle can pick the index that is already current; that still counts
    /// as a selection and restarts the episode.
    EpisodeChanged {
        /// Index of the new current episode
        index: usize,
    },

    /// The playing flag changed value
    PlayingChanged {
        /// New value
        playing: bool,
    },

    /// Loop mode changed
    LoopingChanged {
        /// New value
        looping: bool,
    },

    /// Shuffle mode changed
    ShufflingChanged {
        /// New value
        shuffling: bool,
    },

    /// The queue was emptied
    Cleared,
}
