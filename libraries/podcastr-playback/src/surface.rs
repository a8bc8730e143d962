//! Player surface - binds the shared controller to a media element
//!
//! The surface is the persistent player panel minus its pixels. It forwards
//! user intent into controller actions, turns controller events into media
//! commands, and keeps the displayed progress.
//!
//! Play and pause are issued from exactly one place, [`PlayerSurface::sync`],
//! in response to the controller's playing flag. Seeking never touches them.

use crate::{
    context::PlayerContext,
    events::PlayerEvent,
    media::{MediaElement, MediaEvent},
    types::PlayerSnapshot,
};
use podcastr_core::{format_duration, Episode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Enabled/highlighted state of one transport button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlState {
    /// Button accepts input
    pub enabled: bool,

    /// Button is highlighted (mode on, or a step in that direction exists)
    pub active: bool,
}

/// Transport buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransportControls {
    /// Shuffle mode toggle
    pub shuffle: ControlState,
    /// Step back in the queue
    pub previous: ControlState,
    /// Play or pause the current episode
    pub play_pause: ControlState,
    /// Step forward in the queue
    pub next: ControlState,
    /// Loop mode toggle
    pub repeat: ControlState,
}

impl TransportControls {
    /// Derive button states from a snapshot
    ///
    /// Everything is disabled without a current episode. Shuffle, previous
    /// and next also need more than one queued episode; previous and next
    /// additionally need an episode in that direction.
    pub fn from_snapshot(snapshot: &PlayerSnapshot) -> Self {
        let has_episode = snapshot.current_episode.is_some();
        let has_choice = has_episode && snapshot.queue.len() > 1;
        let last_index = snapshot.queue.len().saturating_sub(1);

        Self {
            shuffle: ControlState {
                enabled: has_choice,
                active: snapshot.is_shuffling,
            },
            previous: ControlState {
                enabled: has_choice && snapshot.has_previous,
                active: snapshot.current_index != 0,
            },
            play_pause: ControlState {
                enabled: has_episode,
                active: snapshot.is_playing,
            },
            next: ControlState {
                enabled: has_choice && snapshot.has_next,
                active: snapshot.current_index != last_index,
            },
            repeat: ControlState {
                enabled: has_episode,
                active: snapshot.is_looping,
            },
        }
    }
}

/// What the panel shows for the current episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// Episode title
    pub title: String,

    /// Hosts and guests line
    pub members: String,

    /// Cover image URL
    pub thumbnail: String,

    /// Slider maximum
    pub duration_secs: u64,

    /// Slider value
    pub progress_secs: u64,
}

/// Everything needed to render the player panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// `None` renders the "pick an episode" placeholder
    pub now_playing: Option<NowPlaying>,

    /// Elapsed time, `HH:MM:SS`
    pub elapsed: String,

    /// Episode length, `HH:MM:SS` (zero when empty)
    pub total: String,

    pub controls: TransportControls,
}

enum Selection {
    Load,
    Clear,
}

/// Player panel logic bound to a media element
pub struct PlayerSurface<M: MediaElement> {
    context: PlayerContext,
    media: M,

    // Displayed elapsed time, whole seconds
    progress_secs: u64,

    // Set once metadata loads; time updates are ignored before that
    progress_armed: bool,
}

impl<M: MediaElement> PlayerSurface<M> {
    /// Bind a media element to the shared context
    pub fn new(context: PlayerContext, media: M) -> Self {
        Self {
            context,
            media,
            progress_secs: 0,
            progress_armed: false,
        }
    }

    /// Shared context this surface reads from
    pub fn context(&self) -> &PlayerContext {
        &self.context
    }

    /// Underlying media element
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Underlying media element, mutably (for drivers that poll it)
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// Displayed elapsed time in whole seconds
    pub fn progress_secs(&self) -> u64 {
        self.progress_secs
    }

    // ===== Controller -> Media =====

    /// Apply pending controller changes to the media element
    ///
    /// Call after any action performed through the context outside this
    /// surface (e.g. a listing view starting a queue). Surface methods call
    /// it themselves.
    pub fn sync(&mut self) {
        let events = self.context.drain_events();
        if events.is_empty() {
            return;
        }

        let mut selection = None;
        let mut playing_change = None;

        for event in events {
            match event {
                PlayerEvent::EpisodeChanged { .. } => selection = Some(Selection::Load),
                PlayerEvent::Cleared => selection = Some(Selection::Clear),
                PlayerEvent::PlayingChanged { playing } => playing_change = Some(playing),
                PlayerEvent::LoopingChanged { looping } => self.media.set_loop(looping),
                PlayerEvent::QueueReplaced { .. } | PlayerEvent::ShufflingChanged { .. } => {}
            }
        }

        match selection {
            Some(Selection::Clear) => {
                debug!("Player cleared, pausing media");
                self.media.pause();
                self.reset_progress();
            }
            Some(Selection::Load) => {
                let snapshot = self.context.snapshot();
                if let Some(episode) = &snapshot.current_episode {
                    self.load(episode, snapshot.is_looping);
                    // Autoplay the new source only if playback is wanted
                    if snapshot.is_playing {
                        self.resume();
                    } else if playing_change == Some(false) {
                        self.media.pause();
                    }
                }
            }
            None => match playing_change {
                Some(true) => self.resume(),
                Some(false) => self.media.pause(),
                None => {}
            },
        }
    }

    // ===== Media -> Controller =====

    /// React to a notification from the media element
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata => self.setup_progress_listener(),
            MediaEvent::TimeUpdate => {
                if self.progress_armed {
                    self.progress_secs = self.media.current_time().max(0.0).floor() as u64;
                }
            }
            MediaEvent::Play => self.context.set_playing_state(true),
            MediaEvent::Pause => self.context.set_playing_state(false),
            MediaEvent::Ended => self.handle_episode_ended(),
        }

        self.sync();
    }

    /// Current episode finished on its own
    ///
    /// Moves on when there is a next episode, otherwise stops and clears the
    /// queue rather than wrapping around. Loop mode never reaches here: the
    /// media element repeats internally and does not report `Ended`.
    pub fn handle_episode_ended(&mut self) {
        if self.context.read(|c| c.has_next()) {
            self.context.play_next();
        } else {
            debug!("Queue finished");
            self.context.clear_player_state();
        }

        self.sync();
    }

    // ===== User intent =====

    /// Jump to `target_secs` and show it immediately
    ///
    /// Targets past the end of the episode are clamped to its length.
    pub fn handle_seek(&mut self, target_secs: u64) {
        let Some(duration_secs) = self
            .context
            .read(|c| c.current_episode().map(|e| e.duration_secs))
        else {
            debug!(target_secs, "Ignoring seek with no episode loaded");
            return;
        };

        let target = if duration_secs > 0 {
            target_secs.min(duration_secs)
        } else {
            target_secs
        };

        if let Err(e) = self.media.seek(target) {
            warn!(error = %e, target, "Media element failed to seek");
        }
        self.progress_secs = target;
    }

    /// Play/pause button
    pub fn toggle_play(&mut self) {
        if self.controls().play_pause.enabled {
            self.context.toggle_play();
            self.sync();
        }
    }

    /// Next button
    pub fn play_next(&mut self) {
        if self.controls().next.enabled {
            self.context.play_next();
            self.sync();
        }
    }

    /// Previous button
    pub fn play_previous(&mut self) {
        if self.controls().previous.enabled {
            self.context.play_previous();
            self.sync();
        }
    }

    /// Repeat button
    pub fn toggle_loop(&mut self) {
        if self.controls().repeat.enabled {
            self.context.toggle_loop();
            self.sync();
        }
    }

    /// Shuffle button
    pub fn toggle_shuffle(&mut self) {
        if self.controls().shuffle.enabled {
            self.context.toggle_shuffle();
            self.sync();
        }
    }

    // ===== Rendering =====

    /// Current transport button states
    pub fn controls(&self) -> TransportControls {
        TransportControls::from_snapshot(&self.context.snapshot())
    }

    /// Everything the panel renders
    pub fn view(&self) -> PlayerView {
        let snapshot = self.context.snapshot();
        let controls = TransportControls::from_snapshot(&snapshot);

        let now_playing = snapshot.current_episode.map(|episode| NowPlaying {
            title: episode.title,
            members: episode.members,
            thumbnail: episode.thumbnail,
            duration_secs: episode.duration_secs,
            progress_secs: self.progress_secs,
        });

        let total = now_playing.as_ref().map_or(0, |n| n.duration_secs);

        PlayerView {
            elapsed: format_duration(self.progress_secs),
            total: format_duration(total),
            now_playing,
            controls,
        }
    }

    fn load(&mut self, episode: &Episode, looping: bool) {
        debug!(title = %episode.title, url = %episode.url, "Loading episode");

        if let Err(e) = self.media.set_source(&episode.url) {
            warn!(error = %e, url = %episode.url, "Media element rejected source");
        }
        self.media.set_loop(looping);
        self.reset_progress();
    }

    fn resume(&mut self) {
        // The flag stays as requested; a failing element just stays silent
        if let Err(e) = self.media.play() {
            warn!(error = %e, "Media element failed to play");
        }
    }

    fn setup_progress_listener(&mut self) {
        if let Err(e) = self.media.seek(0) {
            warn!(error = %e, "Media element failed to rewind");
        }
        self.progress_secs = 0;
        self.progress_armed = true;
    }

    fn reset_progress(&mut self) {
        self.progress_secs = 0;
        self.progress_armed = false;
    }
}
