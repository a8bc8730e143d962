//! Podcastr Episode Client
//!
//! Access to the episode catalogue served by the Podcastr JSON API.
//!
//! # Features
//!
//! - **Listings**: newest-first episode lists with a limit
//! - **Details**: a single episode with its HTML description
//! - **Caching**: responses kept in memory for hours at a time
//!
//! Views depend on the [`EpisodeRepository`] trait, never on HTTP directly.
//!
//! # Example
//!
//! ```ignore
//! use podcastr_client::{
//!     CachingRepository, ClientConfig, EpisodeRepository, HttpEpisodeRepository, ListQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http = HttpEpisodeRepository::new(ClientConfig::new("http://localhost:3333"))?;
//!     let repository = CachingRepository::new(http);
//!
//!     for summary in repository.list_episodes(&ListQuery::latest(12)).await? {
//!         println!("{} ({})", summary.episode.title, summary.published_label());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod cache;
mod error;
mod http;
mod repository;
mod types;

pub use cache::{CachingRepository, DEFAULT_EPISODE_TTL, DEFAULT_LISTING_TTL};
pub use error::{ClientError, Result};
pub use http::HttpEpisodeRepository;
pub use repository::EpisodeRepository;
pub use types::{ClientConfig, ListQuery, RawDuration, RawEpisode, RawFile, RawId, SortOrder};
