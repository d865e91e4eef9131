pub const DEFAULT_USERNAME: &str = "BreweryX Updates";
pub const DEFAULT_AVATAR_URL: &str = "https://github.com/breweryteam.png";
pub const DEFAULT_COLOR: &str = "F5E083";

/// Where and as whom release announcements are posted.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifierConfig {
    pub webhook_url: String,
    pub username: String,
    pub avatar_url: String,
    pub content: Option<String>,
    pub color: String,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
}

impl NotifierConfig {
    /// Defaults match the BreweryX release channel, with the avatar reused as the embed thumbnail.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        NotifierConfig {
            webhook_url: webhook_url.into(),
            username: DEFAULT_USERNAME.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            content: None,
            color: DEFAULT_COLOR.to_string(),
            thumbnail_url: Some(DEFAULT_AVATAR_URL.to_string()),
            image_url: None,
        }
    }
}

/// One release announcement, before it is split into embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub title: String,
    pub description: String,
    pub color: String,
    pub username: String,
    pub avatar_url: String,
    pub content: Option<String>,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
}

impl Announcement {
    pub fn new(config: &NotifierConfig, title: impl Into<String>, description: impl Into<String>) -> Self {
        Announcement {
            title: title.into(),
            description: description.into(),
            color: config.color.clone(),
            username: config.username.clone(),
            avatar_url: config.avatar_url.clone(),
            content: config.content.clone(),
            thumbnail_url: config.thumbnail_url.clone(),
            image_url: config.image_url.clone(),
        }
    }
}

pub fn release_title(product: &str, version: &str) -> String {
    format!("{} - v{}", product, version)
}
