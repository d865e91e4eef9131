use serde::Serialize;

use super::release::Announcement;
use crate::error::NotifyError;

/// Discord rejects embeds whose description is longer than this.
pub const MAX_EMBED_DESCRIPTION_LENGTH: usize = 4096;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DiscordWebhook {
    pub url: String,
    pub body: DiscordWebhookBody,
}

impl DiscordWebhook {
    pub fn new(url: String, body: DiscordWebhookBody) -> Result<Self, NotifyError> {
        if url.trim().is_empty() {
            return Err(NotifyError::MissingEndpoint);
        }
        Ok(DiscordWebhook { url, body })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DiscordWebhookBody {
    pub username: String,
    pub avatar_url: String,
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EmbedMedia {
    pub url: String,
}

impl TryFrom<Announcement> for DiscordWebhookBody {
    type Error = NotifyError;

    fn try_from(announcement: Announcement) -> Result<Self, Self::Error> {
        let color = parse_color(&announcement.color)?;
        let thumbnail = announcement.thumbnail_url.map(|url| EmbedMedia { url });
        let image = announcement.image_url.map(|url| EmbedMedia { url });

        let embeds = split_description(&announcement.description)
            .into_iter()
            .map(|chunk| Embed {
                title: announcement.title.clone(),
                description: chunk.to_string(),
                color,
                thumbnail: thumbnail.clone(),
                image: image.clone(),
            })
            .collect();

        Ok(DiscordWebhookBody {
            username: announcement.username,
            avatar_url: announcement.avatar_url,
            content: announcement.content.unwrap_or_default(),
            embeds,
        })
    }
}

/// Builds the webhook for one announcement. Fails before any network activity
/// if the endpoint is empty or the color is not hex.
pub fn build_payload(url: impl Into<String>, announcement: Announcement) -> Result<DiscordWebhook, NotifyError> {
    let body = DiscordWebhookBody::try_from(announcement)?;
    DiscordWebhook::new(url.into(), body)
}

/// Accepts an optional `#` followed by one to six hex digits.
pub fn parse_color(hex: &str) -> Result<u32, NotifyError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.is_empty() || digits.len() > 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(NotifyError::Format(hex.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| NotifyError::Format(hex.to_string()))
}

// split on character count only, a chunk may end mid-word or mid-markdown
pub fn split_description(description: &str) -> Vec<&str> {
    if description.chars().count() <= MAX_EMBED_DESCRIPTION_LENGTH {
        return vec![description];
    }

    let mut chunks = Vec::new();
    let mut rest = description;
    while !rest.is_empty() {
        let split_at = rest
            .char_indices()
            .nth(MAX_EMBED_DESCRIPTION_LENGTH)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(split_at);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}
