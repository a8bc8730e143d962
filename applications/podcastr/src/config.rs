//! Front-end configuration
use crate::error::{AppError, Result};
use podcastr_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_home")]
    pub home: HomeSettings,

    #[serde(default = "default_cache")]
    pub cache: CacheSettings,

    #[serde(default = "default_player")]
    pub player: PlayerSettings,

    #[serde(default = "default_log")]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HomeSettings {
    /// Episodes fetched for the home page
    #[serde(default = "default_home_limit")]
    pub limit: usize,

    /// How many of them are shown as latest releases
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheSettings {
    #[serde(default = "default_listing_ttl_secs")]
    pub listing_ttl_secs: u64,

    #[serde(default = "default_episode_ttl_secs")]
    pub episode_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    /// Headless clock resolution
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    /// Used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `podcastr.toml` is used if
    /// present. `PODCASTR_`-prefixed variables override the file, with `__`
    /// between section and key (`PODCASTR_HOME__LIMIT=6`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, environment())
    }

    /// [`AppConfig::load`] with an explicit environment source
    pub fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(env);

        let config = settings
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.url.trim().is_empty() {
            return Err(AppError::Config(
                "API URL is required (set PODCASTR_API_URL or --api-url)".to_string(),
            ));
        }

        if self.home.limit == 0 {
            return Err(AppError::Config(
                "home.limit must be at least 1".to_string(),
            ));
        }

        if self.player.tick_millis == 0 {
            return Err(AppError::Config(
                "player.tick_millis must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings for the HTTP repository
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }

    pub fn listing_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.listing_ttl_secs)
    }

    pub fn episode_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.episode_ttl_secs)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.player.tick_millis)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("PODCASTR")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        url: default_api_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_api_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_home() -> HomeSettings {
    HomeSettings {
        limit: default_home_limit(),
        latest_count: default_latest_count(),
    }
}

fn default_home_limit() -> usize {
    12
}

fn default_latest_count() -> usize {
    2
}

fn default_cache() -> CacheSettings {
    CacheSettings {
        listing_ttl_secs: default_listing_ttl_secs(),
        episode_ttl_secs: default_episode_ttl_secs(),
    }
}

fn default_listing_ttl_secs() -> u64 {
    8 * 60 * 60
}

fn default_episode_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_player() -> PlayerSettings {
    PlayerSettings {
        tick_millis: default_tick_millis(),
    }
}

fn default_tick_millis() -> u64 {
    250
}

fn default_log() -> LogSettings {
    LogSettings {
        filter: default_log_filter(),
    }
}

fn default_log_filter() -> String {
    "podcastr=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            home: default_home(),
            cache: default_cache(),
            player: default_player(),
            log: default_log(),
        }
    }
}
