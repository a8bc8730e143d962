use crate::config::HomeSettings;
use crate::error::{AppError, Result};
use podcastr_client::{EpisodeRepository, ListQuery};
use podcastr_core::{Episode, EpisodeId, EpisodeSummary};
use podcastr_playback::PlayerContext;
use tracing::debug;

/// One listing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRow {
    pub id: EpisodeId,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub published: String,
    pub duration: String,

    /// Position of this row in the queue handed to the player
    pub play_index: usize,
}

impl EpisodeRow {
    fn from_summary(summary: &EpisodeSummary, play_index: usize) -> Self {
        Self {
            id: summary.id.clone(),
            title: summary.episode.title.clone(),
            members: summary.episode.members.clone(),
            thumbnail: summary.episode.thumbnail.clone(),
            published: summary.published_label(),
            duration: summary.episode.duration_label(),
            play_index,
        }
    }
}

/// Home page: the newest episodes split into "latest" and "all"
///
/// Both sections play from one queue (latest followed by the rest), so a
/// row's `play_index` in the second section is offset by the number of
/// latest releases.
#[derive(Debug, Clone)]
pub struct HomeView {
    latest: Vec<EpisodeRow>,
    all: Vec<EpisodeRow>,
    queue: Vec<Episode>,
}

impl HomeView {
    /// Fetch the newest `settings.limit` episodes and build the page
    pub async fn load<R>(repository: &R, settings: &HomeSettings) -> Result<Self>
    where
        R: EpisodeRepository + ?Sized,
    {
        let episodes = repository
            .list_episodes(&ListQuery::latest(settings.limit))
            .await?;

        debug!(episodes = episodes.len(), "Home listing loaded");

        Ok(Self::from_episodes(&episodes, settings.latest_count))
    }

    /// Build the page from an already ordered listing
    pub fn from_episodes(episodes: &[EpisodeSummary], latest_count: usize) -> Self {
        let split = latest_count.min(episodes.len());

        let rows: Vec<EpisodeRow> = episodes
            .iter()
            .enumerate()
            .map(|(index, summary)| EpisodeRow::from_summary(summary, index))
            .collect();

        let mut latest = rows;
        let all = latest.split_off(split);

        Self {
            latest,
            all,
            queue: episodes.iter().map(|s| s.episode.clone()).collect(),
        }
    }

    pub fn latest(&self) -> &[EpisodeRow] {
        &self.latest
    }

    pub fn all(&self) -> &[EpisodeRow] {
        &self.all
    }

    /// Queue handed to the player, in display order
    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Play the row at `play_index`, queueing the whole page
    pub fn play(&self, context: &PlayerContext, play_index: usize) -> Result<()> {
        if self.queue.is_empty() {
            return Err(AppError::NothingToPlay);
        }
        if play_index >= self.queue.len() {
            return Err(AppError::RowOutOfRange {
                index: play_index,
                length: self.queue.len(),
            });
        }

        context.play_queue(self.queue.clone(), play_index);
        Ok(())
    }

    /// Play a row by ID
    pub fn play_episode(&self, context: &PlayerContext, id: &EpisodeId) -> Result<()> {
        let row = self
            .latest
            .iter()
            .chain(self.all.iter())
            .find(|row| &row.id == id)
            .ok_or(AppError::NothingToPlay)?;

        self.play(context, row.play_index)
    }
}
