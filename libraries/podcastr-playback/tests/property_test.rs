//! Property-based tests for the playback controller
//!
//! Uses proptest to verify invariants across random queues and random
//! action sequences.

use podcastr_core::Episode;
use podcastr_playback::{PlayerController, QueueState};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_episode() -> impl Strategy<Value = Episode> {
    (
        "[A-Za-z ]{1,30}", // title
        "[A-Za-z ,]{1,30}", // members
        "[a-z0-9]{1,10}",  // slug
        0u64..10_800,      // duration (up to 3 hours)
    )
        .prop_map(|(title, members, slug, duration_secs)| {
            Episode::new(
                title,
                members,
                format!("https://cdn.example.com/{}.jpg", slug),
                duration_secs,
                format!("https://cdn.example.com/{}.m4a", slug),
            )
        })
}

fn arbitrary_queue() -> impl Strategy<Value = Vec<Episode>> {
    prop::collection::vec(arbitrary_episode(), 1..30)
}

/// Controller actions, with queue/index payloads for the replacing ones
#[derive(Debug, Clone)]
enum Action {
    PlayQueue(Vec<Episode>, usize),
    PlaySingle(Episode),
    TogglePlay,
    SetPlaying(bool),
    ToggleLoop,
    ToggleShuffle,
    Next,
    Previous,
    Clear,
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (arbitrary_queue(), any::<prop::sample::Index>()).prop_map(|(queue, index)| {
            let start = index.index(queue.len());
            Action::PlayQueue(queue, start)
        }),
        arbitrary_episode().prop_map(Action::PlaySingle),
        Just(Action::TogglePlay),
        any::<bool>().prop_map(Action::SetPlaying),
        Just(Action::ToggleLoop),
        Just(Action::ToggleShuffle),
        Just(Action::Next),
        Just(Action::Next),
        Just(Action::Previous),
        Just(Action::Clear),
    ]
}

fn apply(controller: &mut PlayerController, action: Action) {
    match action {
        Action::PlayQueue(queue, start) => controller.play_queue(queue, start),
        Action::PlaySingle(episode) => controller.play_single(episode),
        Action::TogglePlay => controller.toggle_play(),
        Action::SetPlaying(state) => controller.set_playing_state(state),
        Action::ToggleLoop => controller.toggle_loop(),
        Action::ToggleShuffle => controller.toggle_shuffle(),
        Action::Next => controller.play_next(),
        Action::Previous => controller.play_previous(),
        Action::Clear => controller.clear_player_state(),
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: play_queue selects list[i] and starts playing
    #[test]
    fn play_queue_selects_start(queue in arbitrary_queue(), index in any::<prop::sample::Index>()) {
        let mut controller = PlayerController::with_seed(1);
        let start = index.index(queue.len());

        controller.play_queue(queue.clone(), start);

        prop_assert_eq!(controller.current_episode(), Some(&queue[start]));
        prop_assert!(controller.is_playing());
    }

    /// Property: derived flags and index bounds hold in every reachable state
    #[test]
    fn invariants_hold_for_any_action_sequence(
        seed in any::<u64>(),
        actions in prop::collection::vec(arbitrary_action(), 1..60)
    ) {
        let mut controller = PlayerController::with_seed(seed);

        for action in actions {
            apply(&mut controller, action);

            let index = controller.current_index();
            let len = controller.queue_len();

            prop_assert_eq!(controller.has_previous(), index > 0);
            prop_assert_eq!(
                controller.has_next(),
                controller.is_shuffling() || index + 1 < len
            );

            match controller.state() {
                QueueState::Idle => {
                    prop_assert_eq!(index, 0);
                    prop_assert!(controller.current_episode().is_none());
                    prop_assert!(!controller.is_playing());
                }
                QueueState::Loaded { queue, index, .. } => {
                    prop_assert!(!queue.is_empty());
                    prop_assert!(*index < queue.len());
                }
            }
        }
    }

    /// Property: sequential next at the end of the queue changes nothing
    #[test]
    fn next_at_end_without_shuffle_is_noop(queue in arbitrary_queue()) {
        let mut controller = PlayerController::with_seed(1);
        let last = queue.len() - 1;
        controller.play_queue(queue, last);

        prop_assert!(!controller.has_next());
        controller.play_next();

        prop_assert_eq!(controller.current_index(), last);
    }

    /// Property: previous at the start of the queue changes nothing
    #[test]
    fn previous_at_start_is_noop(queue in arbitrary_queue()) {
        let mut controller = PlayerController::with_seed(1);
        controller.play_queue(queue, 0);

        controller.play_previous();

        prop_assert_eq!(controller.current_index(), 0);
    }

    /// Property: toggle_loop twice restores the flag
    #[test]
    fn toggle_loop_twice_restores(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let mut controller = PlayerController::with_seed(1);
        for action in actions {
            apply(&mut controller, action);
        }

        let before = controller.is_looping();
        controller.toggle_loop();
        controller.toggle_loop();

        prop_assert_eq!(controller.is_looping(), before);
    }

    /// Property: clearing always yields an empty queue at index 0
    #[test]
    fn clear_from_any_state(
        seed in any::<u64>(),
        actions in prop::collection::vec(arbitrary_action(), 0..30)
    ) {
        let mut controller = PlayerController::with_seed(seed);
        for action in actions {
            apply(&mut controller, action);
        }

        controller.clear_player_state();

        prop_assert_eq!(controller.queue_len(), 0);
        prop_assert_eq!(controller.current_index(), 0);
        prop_assert!(!controller.is_playing());
    }

    /// Property: shuffled next always lands inside the queue
    #[test]
    fn shuffled_next_stays_in_range(
        seed in any::<u64>(),
        queue in arbitrary_queue(),
        steps in 1usize..50
    ) {
        let mut controller = PlayerController::with_seed(seed);
        let len = queue.len();
        controller.play_queue(queue, len - 1);
        controller.toggle_shuffle();

        for _ in 0..steps {
            prop_assert!(controller.has_next());
            controller.play_next();
            prop_assert!(controller.current_index() < len);
        }
    }

    /// Property: queue contents are never reordered by navigation
    #[test]
    fn navigation_keeps_queue_order(
        seed in any::<u64>(),
        queue in arbitrary_queue(),
        moves in prop::collection::vec(any::<bool>(), 0..40)
    ) {
        let mut controller = PlayerController::with_seed(seed);
        controller.play_queue(queue.clone(), 0);
        controller.toggle_shuffle();

        for forward in moves {
            if forward {
                controller.play_next();
            } else {
                controller.play_previous();
            }
        }

        prop_assert_eq!(controller.queue(), queue.as_slice());
    }
}
