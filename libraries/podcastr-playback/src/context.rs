//! Shared player context
//!
//! One [`PlayerController`] per UI session, shared by every view through a
//! cloneable handle. Views mutate only through the action methods and read
//! through [`PlayerContext::snapshot`] or [`PlayerContext::read`].

use crate::{
    controller::PlayerController,
    events::PlayerEvent,
    types::{PlayerConfig, PlayerSnapshot},
};
use podcastr_core::Episode;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to the session's playback controller
#[derive(Clone, Default)]
pub struct PlayerContext {
    inner: Arc<Mutex<PlayerController>>,
}

impl PlayerContext {
    /// Create a context around a fresh controller
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PlayerController::new(config))),
        }
    }

    /// Run a read-only projection against the controller
    pub fn read<T>(&self, f: impl FnOnce(&PlayerController) -> T) -> T {
        f(&self.lock())
    }

    /// Owned copy of the whole state
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.lock().snapshot()
    }

    // ===== Actions =====

    /// See [`PlayerController::play_queue`]
    pub fn play_queue(&self, list: Vec<Episode>, start_index: usize) {
        self.lock().play_queue(list, start_index);
    }

    /// See [`PlayerController::play_single`]
    pub fn play_single(&self, episode: Episode) {
        self.lock().play_single(episode);
    }

    /// See [`PlayerController::toggle_play`]
    pub fn toggle_play(&self) {
        self.lock().toggle_play();
    }

    /// See [`PlayerController::set_playing_state`]
    pub fn set_playing_state(&self, state: bool) {
        self.lock().set_playing_state(state);
    }

    /// See [`PlayerController::toggle_loop`]
    pub fn toggle_loop(&self) {
        self.lock().toggle_loop();
    }

    /// See [`PlayerController::toggle_shuffle`]
    pub fn toggle_shuffle(&self) {
        self.lock().toggle_shuffle();
    }

    /// See [`PlayerController::play_next`]
    pub fn play_next(&self) {
        self.lock().play_next();
    }

    /// See [`PlayerController::play_previous`]
    pub fn play_previous(&self) {
        self.lock().play_previous();
    }

    /// See [`PlayerController::clear_player_state`]
    pub fn clear_player_state(&self) {
        self.lock().clear_player_state();
    }

    /// Take pending controller events (player surface only)
    pub(crate) fn drain_events(&self) -> Vec<PlayerEvent> {
        self.lock().drain_events()
    }

    // Controller state is consistent between actions, so a panic elsewhere
    // while holding the lock leaves nothing half-written.
    fn lock(&self) -> MutexGuard<'_, PlayerController> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for PlayerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PlayerContext").field(&*self.lock()).finish()
    }
}
