//! The episode repository seam used by the listing views.

use crate::error::Result;
use crate::types::ListQuery;
use async_trait::async_trait;
use podcastr_core::{EpisodeDetail, EpisodeId, EpisodeSummary};

/// Source of episode listings and episode details.
///
/// Implementations own transport and error surfacing. Callers never retry.
#[async_trait]
pub trait EpisodeRepository: Send + Sync {
    /// Fetch a listing, ordered and limited as the query asks.
    async fn list_episodes(&self, query: &ListQuery) -> Result<Vec<EpisodeSummary>>;

    /// Fetch one episode including its description.
    ///
    /// Returns [`ClientError::NotFound`](crate::ClientError::NotFound) for
    /// unknown IDs.
    async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail>;
}

#[async_trait]
impl<R: EpisodeRepository + ?Sized> EpisodeRepository for std::sync::Arc<R> {
    async fn list_episodes(&self, query: &ListQuery) -> Result<Vec<EpisodeSummary>> {
        (**self).list_episodes(query).await
    }

    async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail> {
        (**self).get_episode(id).await
    }
}
