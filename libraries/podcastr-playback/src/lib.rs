//! Podcastr - Playback State
//!
//! Platform-agnostic playback state for the Podcastr front-end.
//!
//! This crate provides:
//! - Episode queue with a current position
//! - Play/pause, loop and shuffle flags
//! - Sequential and shuffled next/previous navigation
//! - A shared context handle for every view
//! - Player surface binding logic (transport controls, progress, seeking)
//!
//! # Architecture
//!
//! `podcastr-playback` never touches audio:
//! - No decoding, buffering or output
//! - No dependency on the content API
//! - No persistence; a new session starts empty
//!
//! The actual audio element is provided via the [`MediaElement`] trait.
//!
//! # Example: Starting a queue
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::PlayerContext;
//!
//! let context = PlayerContext::default();
//!
//! let queue = vec![
//!     Episode::new("A", "Ana", "a.jpg", 100, "https://cdn.example.com/a.mp3"),
//!     Episode::new("B", "Bia", "b.jpg", 200, "https://cdn.example.com/b.mp3"),
//! ];
//!
//! // A listing view hands over the queue and the clicked row
//! context.play_queue(queue, 0);
//!
//! let snapshot = context.snapshot();
//! assert!(snapshot.is_playing);
//! assert!(!snapshot.has_previous);
//! assert!(snapshot.has_next);
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use podcastr_playback::{MediaElement, MediaEvent, PlayerContext, PlayerSurface, Result};
//!
//! // Implement MediaElement for your platform
//! struct MyAudioElement {
//!     // ... platform-specific player
//! }
//!
//! impl MediaElement for MyAudioElement {
//!     fn set_source(&mut self, uri: &str) -> Result<()> { Ok(()) }
//!     fn set_loop(&mut self, looping: bool) {}
//!     fn play(&mut self) -> Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, position_secs: u64) -> Result<()> { Ok(()) }
//!     fn current_time(&self) -> f64 { 0.0 }
//! }
//!
//! let context = PlayerContext::default();
//! let mut surface = PlayerSurface::new(context.clone(), MyAudioElement {});
//!
//! // Forward platform notifications
//! surface.handle_media_event(MediaEvent::LoadedMetadata);
//! surface.handle_media_event(MediaEvent::TimeUpdate);
//! ```

mod context;
mod controller;
mod error;
mod events;
mod media;
mod shuffle;
mod surface;
pub mod types;

// Public exports
pub use context::PlayerContext;
pub use controller::PlayerController;
pub use error::{PlaybackError, Result};
pub use events::PlayerEvent;
pub use media::{MediaElement, MediaEvent};
pub use surface::{ControlState, NowPlaying, PlayerSurface, PlayerView, TransportControls};
pub use types::{PlayerConfig, PlayerSnapshot, QueueState};
