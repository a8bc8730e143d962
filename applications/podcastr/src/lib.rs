//! Podcastr front-end library
//!
//! Listing view models, configuration and the headless media clock used by
//! the `podcastr` binary. Exposed as a library for testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod headless;
pub mod render;
pub mod views;

use podcastr_client::{CachingRepository, HttpEpisodeRepository};

// Re-export commonly used types for convenience
pub use commands::PlayerCommand;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use headless::HeadlessMedia;
pub use views::{EpisodeDetailView, EpisodeRow, HomeView};

/// Repository used by every command: HTTP behind the response cache
pub type Repository = CachingRepository<HttpEpisodeRepository>;

/// Build the repository described by `config`
pub fn build_repository(config: &AppConfig) -> Result<Repository> {
    let http = HttpEpisodeRepository::new(config.client_config())?;
    Ok(CachingRepository::with_ttl(
        http,
        config.listing_ttl(),
        config.episode_ttl(),
    ))
}
