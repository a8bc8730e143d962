use crate::error::Result;
use podcastr_client::EpisodeRepository;
use podcastr_core::{Episode, EpisodeDetail, EpisodeId};
use podcastr_playback::PlayerContext;
use tracing::debug;

/// Episode page
#[derive(Debug, Clone)]
pub struct EpisodeDetailView {
    pub id: EpisodeId,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    pub published: String,
    pub duration: String,
    pub description_html: String,
    episode: Episode,
}

impl EpisodeDetailView {
    /// Fetch one episode and build the page
    pub async fn load<R>(repository: &R, id: &EpisodeId) -> Result<Self>
    where
        R: EpisodeRepository + ?Sized,
    {
        let detail = repository.get_episode(id).await?;
        debug!(id = %id, "Episode loaded");
        Ok(Self::from_detail(detail))
    }

    pub fn from_detail(detail: EpisodeDetail) -> Self {
        let published = detail.summary.published_label();
        let episode = detail.summary.episode;

        Self {
            id: detail.summary.id,
            title: episode.title.clone(),
            members: episode.members.clone(),
            thumbnail: episode.thumbnail.clone(),
            published,
            duration: episode.duration_label(),
            description_html: detail.description,
            episode,
        }
    }

    /// Description as plain text
    pub fn description_text(&self) -> String {
        strip_html(&self.description_html)
    }

    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    /// Play this episode on its own
    pub fn play(&self, context: &PlayerContext) {
        context.play_single(self.episode.clone());
    }
}

/// Reduce an HTML fragment to readable text
///
/// Tags are dropped, block ends and `<br>` become line breaks, and the
/// common character entities are decoded.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // A bare `<` in prose is text, not a tag
            '<' if !chars
                .peek()
                .is_some_and(|&next| next.is_ascii_alphabetic() || next == '/' || next == '!') =>
            {
                text.push(c);
            }
            '<' => {
                let tag: String = chars.by_ref().take_while(|&c| c != '>').collect();
                let name = tag
                    .trim_start_matches('/')
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or_default()
                    .to_ascii_lowercase();
                let closing = tag.starts_with('/');

                let breaks = name == "br"
                    || (closing && matches!(name.as_str(), "p" | "div" | "li" | "h1" | "h2" | "h3"));
                if breaks && !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            '&' => {
                let mut entity = String::new();
                let mut terminated = false;
                while let Some(&next) = chars.peek() {
                    if next == ';' {
                        chars.next();
                        terminated = true;
                        break;
                    }
                    if !(next.is_ascii_alphanumeric() || next == '#') || entity.len() >= 8 {
                        break;
                    }
                    entity.push(next);
                    chars.next();
                }

                match (terminated, decode_entity(&entity)) {
                    (true, Some(decoded)) => text.push(decoded),
                    (true, None) => {
                        text.push('&');
                        text.push_str(&entity);
                        text.push(';');
                    }
                    (false, _) => {
                        text.push('&');
                        text.push_str(&entity);
                    }
                }
            }
            _ => text.push(c),
        }
    }

    text.trim().to_string()
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
