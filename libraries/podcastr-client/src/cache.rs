//! Time-based response cache in front of another repository.

use crate::error::Result;
use crate::repository::EpisodeRepository;
use crate::types::ListQuery;
use async_trait::async_trait;
use podcastr_core::{EpisodeDetail, EpisodeId, EpisodeSummary};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

/// Default freshness for listings (8 hours)
pub const DEFAULT_LISTING_TTL: Duration = Duration::from_secs(8 * 60 * 60);

/// Default freshness for episode details (24 hours)
pub const DEFAULT_EPISODE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    stored_at: Instant,
}

#[derive(Debug)]
struct TtlMap<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash, V: Clone> TtlMap<K, V> {
    fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

/// Serves repeated requests from memory until they go stale.
///
/// Errors are never cached; the next call goes to the inner repository.
#[derive(Debug)]
pub struct CachingRepository<R> {
    inner: R,
    listings: TtlMap<ListQuery, Vec<EpisodeSummary>>,
    episodes: TtlMap<EpisodeId, EpisodeDetail>,
}

impl<R: EpisodeRepository> CachingRepository<R> {
    /// Wrap `inner` with the default freshness windows.
    pub fn new(inner: R) -> Self {
        Self::with_ttl(inner, DEFAULT_LISTING_TTL, DEFAULT_EPISODE_TTL)
    }

    /// Wrap `inner` with custom freshness windows.
    pub fn with_ttl(inner: R, listing_ttl: Duration, episode_ttl: Duration) -> Self {
        Self {
            inner,
            listings: TtlMap::new(listing_ttl),
            episodes: TtlMap::new(episode_ttl),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Drop every cached response.
    pub async fn invalidate(&self) {
        self.listings.clear().await;
        self.episodes.clear().await;
    }
}

#[async_trait]
impl<R: EpisodeRepository> EpisodeRepository for CachingRepository<R> {
    async fn list_episodes(&self, query: &ListQuery) -> Result<Vec<EpisodeSummary>> {
        if let Some(cached) = self.listings.get(query).await {
            debug!(limit = query.limit, "Episode listing served from cache");
            return Ok(cached);
        }

        let episodes = self.inner.list_episodes(query).await?;
        self.listings.insert(query.clone(), episodes.clone()).await;
        Ok(episodes)
    }

    async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail> {
        if let Some(cached) = self.episodes.get(id).await {
            debug!(id = %id, "Episode served from cache");
            return Ok(cached);
        }

        let detail = self.inner.get_episode(id).await?;
        self.episodes.insert(id.clone(), detail.clone()).await;
        Ok(detail)
    }
}
