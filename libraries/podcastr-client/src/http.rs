//! HTTP implementation of [`EpisodeRepository`].

use crate::error::{ClientError, Result};
use crate::repository::EpisodeRepository;
use crate::types::{ClientConfig, ListQuery, RawEpisode};
use async_trait::async_trait;
use podcastr_core::{EpisodeDetail, EpisodeId, EpisodeSummary};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

/// Episode repository backed by the JSON episode API.
///
/// # Example
///
/// ```ignore
/// use podcastr_client::{ClientConfig, EpisodeRepository, HttpEpisodeRepository, ListQuery};
///
/// let repository = HttpEpisodeRepository::new(ClientConfig::new("http://localhost:3333"))?;
/// let episodes = repository.list_episodes(&ListQuery::latest(12)).await?;
/// println!("Found {} episodes", episodes.len());
/// ```
#[derive(Debug, Clone)]
pub struct HttpEpisodeRepository {
    http: Client,
    base_url: Url,
}

impl HttpEpisodeRepository {
    /// Create a new repository with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/');
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = Url::parse(url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Podcastr/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The API base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }
}

async fn server_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    ClientError::ServerError { status, message }
}

#[async_trait]
impl EpisodeRepository for HttpEpisodeRepository {
    async fn list_episodes(&self, query: &ListQuery) -> Result<Vec<EpisodeSummary>> {
        let url = self.endpoint(&["episodes"])?;
        debug!(url = %url, limit = query.limit, "Fetching episodes");

        let response = self
            .send(self.http.get(url).query(&query.to_params()))
            .await?;

        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let records: Vec<RawEpisode> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse episode listing: {}", e))
        })?;

        let total = records.len();
        let episodes: Vec<EpisodeSummary> = records
            .into_iter()
            .filter_map(|record| {
                let id = EpisodeId::from(record.id.clone());
                match record.into_summary() {
                    Ok(summary) => Some(summary),
                    Err(e) => {
                        warn!(id = %id, error = %e, "Skipping malformed episode");
                        None
                    }
                }
            })
            .collect();

        debug!(
            episodes = episodes.len(),
            skipped = total - episodes.len(),
            "Fetched episodes"
        );

        Ok(episodes)
    }

    async fn get_episode(&self, id: &EpisodeId) -> Result<EpisodeDetail> {
        let url = self.endpoint(&["episodes", id.as_str()])?;
        debug!(url = %url, "Fetching episode");

        let response = self.send(self.http.get(url)).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(server_error(response).await);
        }

        let record: RawEpisode = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse episode: {}", e))
        })?;

        Ok(record.into_detail()?)
    }
}
