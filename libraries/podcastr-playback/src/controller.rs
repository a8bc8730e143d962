//! Playback controller - queue and transport state
//!
//! Owns the episode queue, the current position and the playing, looping and
//! shuffling flags. All mutation goes through the action methods below; each
//! action records the changes it caused as [`PlayerEvent`]s.

use crate::{
    events::PlayerEvent,
    shuffle::pick_next_index,
    types::{PlayerConfig, PlayerSnapshot, QueueState},
};
use podcastr_core::Episode;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, warn};

/// Central playback state
///
/// Single writer: the UI event loop. Consumers read through
/// [`PlayerController::snapshot`] or the derived accessors.
pub struct PlayerController {
    // Queue and position
    state: QueueState,

    // Listener preferences, kept across queue replacement and clearing
    looping: bool,
    shuffling: bool,

    // Source of shuffle picks
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create new controller with an empty queue
    pub fn new(config: PlayerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            state: QueueState::Idle,
            looping: config.looping,
            shuffling: config.shuffling,
            rng,
            pending_events: Vec::new(),
        }
    }

    /// Create a controller whose shuffle picks are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::new(PlayerConfig {
            seed: Some(seed),
            ..PlayerConfig::default()
        })
    }

    // ===== Queue Actions =====

    /// Replace the queue with `list` and start playing `list[start_index]`
    ///
    /// Callers derive `start_index` from `list` itself. An out-of-range index
    /// is clamped to the last episode; an empty list clears the player.
    pub fn play_queue(&mut self, list: Vec<Episode>, start_index: usize) {
        if list.is_empty() {
            warn!("play_queue called with an empty list, clearing player");
            self.clear_player_state();
            return;
        }

        let index = if start_index < list.len() {
            start_index
        } else {
            warn!(
                start_index,
                length = list.len(),
                "start index out of range, clamping to last episode"
            );
            list.len() - 1
        };

        debug!(length = list.len(), index, "Loading queue");

        let was_playing = self.is_playing();
        let length = list.len();

        self.state = QueueState::Loaded {
            queue: list,
            index,
            playing: true,
        };

        self.emit(PlayerEvent::QueueReplaced { length });
        self.emit(PlayerEvent::EpisodeChanged { index });
        if !was_playing {
            self.emit(PlayerEvent::PlayingChanged { playing: true });
        }
    }

    /// Replace the queue with a single episode and start playing it
    pub fn play_single(&mut self, episode: Episode) {
        self.play_queue(vec![episode], 0);
    }

    /// Empty the queue and stop playback
    ///
    /// Loop and shuffle preferences are kept.
    pub fn clear_player_state(&mut self) {
        let previous = std::mem::replace(&mut self.state, QueueState::Idle);

        if let QueueState::Loaded { playing, .. } = previous {
            debug!("Clearing player state");
            if playing {
                self.emit(PlayerEvent::PlayingChanged { playing: false });
            }
            self.emit(PlayerEvent::Cleared);
        }
    }

    // ===== Transport Actions =====

    /// Flip the playing flag
    ///
    /// Does nothing while the queue is empty.
    pub fn toggle_play(&mut self) {
        let playing = self.is_playing();
        self.set_playing(!playing);
    }

    /// Set the playing flag explicitly
    ///
    /// Fed from the media element's own play/pause notifications. Emits an
    /// event only when the value changes, so echoing the element's state
    /// back does not produce another command.
    pub fn set_playing_state(&mut self, state: bool) {
        self.set_playing(state);
    }

    /// Flip loop mode
    pub fn toggle_loop(&mut self) {
        self.looping = !self.looping;
        debug!(looping = self.looping, "Loop toggled");
        self.emit(PlayerEvent::LoopingChanged {
            looping: self.looping,
        });
    }

    /// Flip shuffle mode
    pub fn toggle_shuffle(&mut self) {
        self.shuffling = !self.shuffling;
        debug!(shuffling = self.shuffling, "Shuffle toggled");
        self.emit(PlayerEvent::ShufflingChanged {
            shuffling: self.shuffling,
        });
    }

    /// Advance to the next episode
    ///
    /// Shuffling picks uniformly over the whole queue (the current episode
    /// included). Otherwise advances by one when a next episode exists, and
    /// does nothing at the end of the queue.
    pub fn play_next(&mut self) {
        let shuffling = self.shuffling;
        let QueueState::Loaded { queue, index, .. } = &mut self.state else {
            return;
        };

        let next = if shuffling {
            pick_next_index(&mut self.rng, queue.len())
        } else if *index + 1 < queue.len() {
            Some(*index + 1)
        } else {
            None
        };

        if let Some(next) = next {
            debug!(from = *index, to = next, shuffling, "Next episode");
            *index = next;
            self.emit(PlayerEvent::EpisodeChanged { index: next });
        }
    }

    /// Go back one episode, if there is one
    pub fn play_previous(&mut self) {
        let QueueState::Loaded { index, .. } = &mut self.state else {
            return;
        };

        if *index > 0 {
            *index -= 1;
            let index = *index;
            debug!(index, "Previous episode");
            self.emit(PlayerEvent::EpisodeChanged { index });
        }
    }

    // ===== Derived State =====

    /// Current queue state
    pub fn state(&self) -> &QueueState {
        &self.state
    }

    /// Episodes in play order (empty when idle)
    pub fn queue(&self) -> &[Episode] {
        match &self.state {
            QueueState::Idle => &[],
            QueueState::Loaded { queue, .. } => queue,
        }
    }

    /// Queue length
    pub fn queue_len(&self) -> usize {
        self.queue().len()
    }

    /// Position of the current episode (0 when idle)
    pub fn current_index(&self) -> usize {
        match &self.state {
            QueueState::Idle => 0,
            QueueState::Loaded { index, .. } => *index,
        }
    }

    /// Episode at the current index
    pub fn current_episode(&self) -> Option<&Episode> {
        self.state.current()
    }

    /// Whether audio should be advancing (always false when idle)
    pub fn is_playing(&self) -> bool {
        matches!(self.state, QueueState::Loaded { playing: true, .. })
    }

    /// Whether the current episode repeats on completion
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Whether "next" picks a random index
    pub fn is_shuffling(&self) -> bool {
        self.shuffling
    }

    /// An earlier episode exists
    pub fn has_previous(&self) -> bool {
        self.current_index() > 0
    }

    /// A next episode exists
    ///
    /// Always true while shuffling, since any index is a valid pick.
    pub fn has_next(&self) -> bool {
        self.shuffling || self.current_index() + 1 < self.queue_len()
    }

    /// Owned read-only projection of the whole state
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            queue: self.queue().to_vec(),
            current_index: self.current_index(),
            current_episode: self.current_episode().cloned(),
            is_playing: self.is_playing(),
            is_looping: self.looping,
            is_shuffling: self.shuffling,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    // ===== Events =====

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn set_playing(&mut self, state: bool) {
        let QueueState::Loaded { playing, .. } = &mut self.state else {
            debug!(requested = state, "Ignoring playing state change with empty queue");
            return;
        };

        if *playing != state {
            *playing = state;
            self.emit(PlayerEvent::PlayingChanged { playing: state });
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

impl std::fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerController")
            .field("state", &self.state)
            .field("looping", &self.looping)
            .field("shuffling", &self.shuffling)
            .field("pending_events", &self.pending_events.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_episode(id: &str, duration_secs: u64) -> Episode {
        Episode::new(
            format!("Episode {}", id),
            "Diego e Richard",
            format!("https://cdn.example.com/{}.jpg", id),
            duration_secs,
            format!("https://cdn.example.com/{}.m4a", id),
        )
    }

    fn create_test_queue(len: usize) -> Vec<Episode> {
        (0..len)
            .map(|i| create_test_episode(&i.to_string(), 60 * (i as u64 + 1)))
            .collect()
    }

    #[test]
    fn create_controller() {
        let controller = PlayerController::default();
        assert_eq!(controller.state(), &QueueState::Idle);
        assert_eq!(controller.current_index(), 0);
        assert!(controller.current_episode().is_none());
        assert!(!controller.is_playing());
        assert!(!controller.is_looping());
        assert!(!controller.is_shuffling());
        assert!(!controller.has_previous());
        assert!(!controller.has_next());
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn config_sets_initial_modes() {
        let controller = PlayerController::new(PlayerConfig {
            looping: true,
            shuffling: true,
            seed: Some(1),
        });

        assert!(controller.is_looping());
        assert!(controller.is_shuffling());
    }

    #[test]
    fn play_queue_selects_start_index() {
        let mut controller = PlayerController::default();
        let queue = create_test_queue(3);

        controller.play_queue(queue.clone(), 1);

        assert_eq!(controller.current_episode(), Some(&queue[1]));
        assert_eq!(controller.current_index(), 1);
        assert!(controller.is_playing());
        assert_eq!(
            controller.drain_events(),
            vec![
                PlayerEvent::QueueReplaced { length: 3 },
                PlayerEvent::EpisodeChanged { index: 1 },
                PlayerEvent::PlayingChanged { playing: true },
            ]
        );
    }

    #[test]
    fn play_queue_while_playing_does_not_repeat_playing_event() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(2), 0);
        controller.drain_events();

        controller.play_queue(create_test_queue(4), 3);

        assert_eq!(
            controller.drain_events(),
            vec![
                PlayerEvent::QueueReplaced { length: 4 },
                PlayerEvent::EpisodeChanged { index: 3 },
            ]
        );
    }

    #[test]
    fn play_queue_clamps_out_of_range_index() {
        let mut controller = PlayerController::default();
        let queue = create_test_queue(2);

        controller.play_queue(queue.clone(), 9);

        assert_eq!(controller.current_index(), 1);
        assert_eq!(controller.current_episode(), Some(&queue[1]));
    }

    #[test]
    fn play_queue_with_empty_list_clears() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(2), 0);

        controller.play_queue(Vec::new(), 0);

        assert_eq!(controller.state(), &QueueState::Idle);
        assert!(!controller.is_playing());
    }

    #[test]
    fn play_single_replaces_queue() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(5), 4);

        let single = create_test_episode("solo", 30);
        controller.play_single(single.clone());

        assert_eq!(controller.queue(), &[single.clone()]);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.current_episode(), Some(&single));
        assert!(controller.is_playing());
    }

    #[test]
    fn toggle_play_flips_flag() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(1), 0);
        controller.drain_events();

        controller.toggle_play();
        assert!(!controller.is_playing());

        controller.toggle_play();
        assert!(controller.is_playing());

        assert_eq!(
            controller.drain_events(),
            vec![
                PlayerEvent::PlayingChanged { playing: false },
                PlayerEvent::PlayingChanged { playing: true },
            ]
        );
    }

    #[test]
    fn toggle_play_when_idle_is_noop() {
        let mut controller = PlayerController::default();

        controller.toggle_play();

        assert!(!controller.is_playing());
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn set_playing_state_only_emits_on_change() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(1), 0);
        controller.drain_events();

        controller.set_playing_state(true);
        assert!(!controller.has_pending_events());

        controller.set_playing_state(false);
        assert!(!controller.is_playing());
        assert_eq!(
            controller.drain_events(),
            vec![PlayerEvent::PlayingChanged { playing: false }]
        );
    }

    #[test]
    fn toggle_loop_is_its_own_inverse() {
        let mut controller = PlayerController::default();

        controller.toggle_loop();
        assert!(controller.is_looping());

        controller.toggle_loop();
        assert!(!controller.is_looping());
    }

    #[test]
    fn next_and_previous_sequential() {
        let mut controller = PlayerController::default();
        let queue = create_test_queue(3);
        controller.play_queue(queue.clone(), 0);

        controller.play_next();
        assert_eq!(controller.current_episode(), Some(&queue[1]));

        controller.play_next();
        assert_eq!(controller.current_episode(), Some(&queue[2]));
        assert!(!controller.has_next());

        controller.play_previous();
        assert_eq!(controller.current_episode(), Some(&queue[1]));
        assert!(controller.has_previous());
    }

    #[test]
    fn next_at_end_is_noop() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(2), 1);
        controller.drain_events();

        controller.play_next();

        assert_eq!(controller.current_index(), 1);
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn previous_at_start_is_noop() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(2), 0);
        controller.drain_events();

        controller.play_previous();

        assert_eq!(controller.current_index(), 0);
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn shuffle_always_has_next() {
        let mut controller = PlayerController::with_seed(3);
        controller.play_queue(create_test_queue(5), 4);
        controller.toggle_shuffle();

        for _ in 0..50 {
            assert!(controller.has_next());
            controller.play_next();
            assert!(controller.current_index() < 5);
        }
    }

    #[test]
    fn shuffle_when_idle_is_noop() {
        let mut controller = PlayerController::with_seed(3);
        controller.toggle_shuffle();
        controller.drain_events();

        assert!(controller.has_next());
        controller.play_next();

        assert_eq!(controller.state(), &QueueState::Idle);
        assert!(!controller.has_pending_events());
    }

    #[test]
    fn clear_resets_queue_and_stops() {
        let mut controller = PlayerController::default();
        controller.play_queue(create_test_queue(3), 2);
        controller.toggle_loop();
        controller.drain_events();

        controller.clear_player_state();

        assert_eq!(controller.queue_len(), 0);
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.is_playing());
        assert!(controller.is_looping(), "modes survive clearing");
        assert_eq!(
            controller.drain_events(),
            vec![
                PlayerEvent::PlayingChanged { playing: false },
                PlayerEvent::Cleared,
            ]
        );
    }

    #[test]
    fn clear_when_idle_emits_nothing() {
        let mut controller = PlayerController::default();

        controller.clear_player_state();

        assert!(!controller.has_pending_events());
    }

    #[test]
    fn snapshot_matches_accessors() {
        let mut controller = PlayerController::default();
        let queue = create_test_queue(2);
        controller.play_queue(queue.clone(), 0);

        let snapshot = controller.snapshot();

        assert_eq!(snapshot.queue, queue);
        assert_eq!(snapshot.current_index, 0);
        assert_eq!(snapshot.current_episode, Some(queue[0].clone()));
        assert!(snapshot.is_playing);
        assert!(!snapshot.has_previous);
        assert!(snapshot.has_next);
    }
}
