//! Headless media element
//!
//! Stands in for an audio element: it keeps a position that advances while
//! "playing" and reports the same notifications a real element would, but
//! produces no sound. Durations come from the episodes registered with it.

use podcastr_core::Episode;
use podcastr_playback::{MediaElement, MediaEvent, PlaybackError, Result};
use std::collections::HashMap;
use std::time::Duration;
use tracing::trace;

#[derive(Debug)]
pub struct HeadlessMedia {
    // Known durations by audio URL
    durations: HashMap<String, f64>,

    source: Option<String>,
    duration_secs: f64,
    position_secs: f64,
    metadata_reported: bool,

    playing: bool,
    looping: bool,

    // Playback rate; 60.0 plays a minute per wall-clock second
    speed: f64,

    // Notifications waiting for the next tick
    pending: Vec<MediaEvent>,
}

impl HeadlessMedia {
    pub fn new(speed: f64) -> Self {
        Self {
            durations: HashMap::new(),
            source: None,
            duration_secs: 0.0,
            position_secs: 0.0,
            metadata_reported: false,
            playing: false,
            looping: false,
            speed: if speed.is_finite() && speed > 0.0 {
                speed
            } else {
                1.0
            },
            pending: Vec::new(),
        }
    }

    /// Make an episode's duration known before it is loaded
    pub fn register(&mut self, episode: &Episode) {
        self.durations
            .insert(episode.url.clone(), episode.duration_secs as f64);
    }

    pub fn register_all<'a>(&mut self, episodes: impl IntoIterator<Item = &'a Episode>) {
        for episode in episodes {
            self.register(episode);
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Advance the clock by `elapsed` wall-clock time
    ///
    /// Returns the notifications raised since the last tick, in order.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<MediaEvent> {
        let mut events = std::mem::take(&mut self.pending);

        if self.source.is_none() {
            return events;
        }

        if !self.metadata_reported {
            self.metadata_reported = true;
            events.push(MediaEvent::LoadedMetadata);
            return events;
        }

        if !self.playing {
            return events;
        }

        self.position_secs += elapsed.as_secs_f64() * self.speed;

        if self.position_secs >= self.duration_secs {
            if self.looping && self.duration_secs > 0.0 {
                self.position_secs %= self.duration_secs;
                events.push(MediaEvent::TimeUpdate);
            } else {
                self.position_secs = self.duration_secs;
                self.playing = false;
                events.push(MediaEvent::TimeUpdate);
                events.push(MediaEvent::Ended);
            }
        } else {
            events.push(MediaEvent::TimeUpdate);
        }

        trace!(position = self.position_secs, events = events.len(), "tick");
        events
    }
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl MediaElement for HeadlessMedia {
    fn set_source(&mut self, uri: &str) -> Result<()> {
        self.duration_secs = self.durations.get(uri).copied().unwrap_or(0.0);
        self.source = Some(uri.to_string());
        self.position_secs = 0.0;
        self.metadata_reported = false;
        self.playing = false;
        self.pending.clear();
        Ok(())
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(PlaybackError::NoSource);
        }
        if !self.playing {
            self.playing = true;
            self.pending.push(MediaEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.pending.push(MediaEvent::Pause);
        }
    }

    fn seek(&mut self, position_secs: u64) -> Result<()> {
        if self.source.is_none() {
            return Err(PlaybackError::NoSource);
        }
        let target = position_secs as f64;
        if self.duration_secs > 0.0 && target > self.duration_secs {
            return Err(PlaybackError::InvalidSeekPosition(position_secs));
        }
        self.position_secs = target;
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.position_secs
    }
}
