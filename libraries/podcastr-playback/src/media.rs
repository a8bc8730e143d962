//! Platform-agnostic media element trait
//!
//! Abstracts the audio element that actually plays episodes (an HTML audio
//! element in a browser, a native player on desktop, a headless clock in
//! tests and the terminal front-end).

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Playback primitive driven by the player surface
///
/// Implementors own decoding, buffering and output. The surface only tells
/// them what to play and where, and listens for [`MediaEvent`]s.
pub trait MediaElement {
    /// Load a new audio resource, replacing the current one
    ///
    /// Implementations report [`MediaEvent::LoadedMetadata`] once the
    /// duration is known.
    fn set_source(&mut self, uri: &str) -> Result<()>;

    /// Repeat the current resource internally instead of reporting `Ended`
    fn set_loop(&mut self, looping: bool);

    /// Resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Jump to `position_secs` from the start
    fn seek(&mut self, position_secs: u64) -> Result<()>;

    /// Current playback position in seconds
    fn current_time(&self) -> f64;
}

/// Notifications reported by a media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Position advanced
    TimeUpdate,

    /// Duration and seekability are known
    LoadedMetadata,

    /// Playback started (by the surface or externally, e.g. media keys)
    Play,

    /// Playback paused (by the surface or externally)
    Pause,

    /// Reached the end of a non-looping resource
    Ended,
}

/// Dummy media element for testing
///
/// Records every command it receives.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct DummyMediaElement {
    pub source: Option<String>,
    pub looping: bool,
    pub playing: bool,
    pub position: f64,
    pub commands: Vec<String>,
}

#[cfg(test)]
impl MediaElement for DummyMediaElement {
    fn set_source(&mut self, uri: &str) -> Result<()> {
        self.source = Some(uri.to_string());
        self.position = 0.0;
        self.commands.push(format!("source {}", uri));
        Ok(())
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
        self.commands.push(format!("loop {}", looping));
    }

    fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(crate::error::PlaybackError::NoSource);
        }
        self.playing = true;
        self.commands.push("play".to_string());
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
        self.commands.push("pause".to_string());
    }

    fn seek(&mut self, position_secs: u64) -> Result<()> {
        self.position = position_secs as f64;
        self.commands.push(format!("seek {}", position_secs));
        Ok(())
    }

    fn current_time(&self) -> f64 {
        self.position
    }
}
