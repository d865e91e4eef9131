use std::path::PathBuf;

use crate::structs::release::{release_title, NotifierConfig};

const DEFAULT_PRODUCT: &str = "BreweryX";
const DEFAULT_CONTENT: &str = "@everyone";
const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

// empty values count as unset
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

pub fn get_webhook_url() -> Option<String> {
    match var("DISCORD_WEBHOOK") {
        Some(url) => {
            tracing::debug!("Found DISCORD_WEBHOOK");
            Some(url)
        }
        None => {
            tracing::debug!("No DISCORD_WEBHOOK found");
            None
        }
    }
}

pub fn get_release_version() -> String {
    match var("RELEASE_VERSION") {
        Some(version) => version,
        None => {
            tracing::warn!("No RELEASE_VERSION found, using \"unknown\"");
            "unknown".to_string()
        }
    }
}

pub fn get_release_title(version: &str) -> String {
    match var("RELEASE_TITLE") {
        Some(title) => {
            tracing::info!("Found custom RELEASE_TITLE: {}", title);
            title
        }
        None => {
            let product = var("RELEASE_PRODUCT").unwrap_or_else(|| DEFAULT_PRODUCT.to_string());
            release_title(&product, version)
        }
    }
}

pub fn get_changelog_override() -> Option<String> {
    var("CHANGELOG")
}

pub fn get_changelog_path() -> PathBuf {
    var("CHANGELOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGELOG_FILE))
}

fn default_thumbnail_enabled() -> bool {
    match var("EMBED_DEFAULT_THUMBNAIL") {
        Some(value) => match value.to_lowercase().parse::<bool>() {
            Ok(enabled) => enabled,
            Err(_) => {
                tracing::warn!("EMBED_DEFAULT_THUMBNAIL is not true or false, keeping the default thumbnail");
                true
            }
        },
        None => true,
    }
}

pub fn load_config(webhook_url: String) -> NotifierConfig {
    let mut config = NotifierConfig::new(webhook_url);

    if let Some(username) = var("WEBHOOK_USERNAME") {
        config.username = username;
    }
    if let Some(avatar_url) = var("WEBHOOK_AVATAR_URL") {
        config.avatar_url = avatar_url;
    }
    config.content = Some(var("WEBHOOK_CONTENT").unwrap_or_else(|| DEFAULT_CONTENT.to_string()));
    if let Some(color) = var("EMBED_COLOR") {
        config.color = color;
    }

    config.thumbnail_url = match var("EMBED_THUMBNAIL_URL") {
        Some(url) => Some(url),
        None if default_thumbnail_enabled() => Some(config.avatar_url.clone()),
        None => None,
    };
    config.image_url = var("EMBED_IMAGE_URL");

    config
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    const CONFIG_VARS: [&str; 7] = [
        "WEBHOOK_USERNAME",
        "WEBHOOK_AVATAR_URL",
        "WEBHOOK_CONTENT",
        "EMBED_COLOR",
        "EMBED_THUMBNAIL_URL",
        "EMBED_DEFAULT_THUMBNAIL",
        "EMBED_IMAGE_URL",
    ];

    fn clear(vars: &[&str]) {
        for name in vars {
            std::env::remove_var(name);
        }
    }

    mod get_webhook_url {
        use super::*;

        #[test]
        #[serial]
        fn unset() {
            std::env::remove_var("DISCORD_WEBHOOK");
            assert_eq!(get_webhook_url(), None);
        }

        #[test]
        #[serial]
        fn empty() {
            std::env::set_var("DISCORD_WEBHOOK", "");
            assert_eq!(get_webhook_url(), None);
        }

        #[test]
        #[serial]
        fn set() {
            std::env::set_var("DISCORD_WEBHOOK", "https://discord.com/api/webhooks/1/abc");
            assert_eq!(get_webhook_url().as_deref(), Some("https://discord.com/api/webhooks/1/abc"));
        }
    }

    mod get_release_title {
        use super::*;

        #[test]
        #[serial]
        fn default() {
            clear(&["RELEASE_TITLE", "RELEASE_PRODUCT"]);
            assert_eq!(get_release_title("3.4.0"), "BreweryX - v3.4.0");
        }

        #[test]
        #[serial]
        fn custom_product() {
            std::env::remove_var("RELEASE_TITLE");
            std::env::set_var("RELEASE_PRODUCT", "BreweryX-Addons");
            assert_eq!(get_release_title("1.0.1"), "BreweryX-Addons - v1.0.1");
        }

        #[test]
        #[serial]
        fn custom_title() {
            std::env::set_var("RELEASE_TITLE", "Hotfix");
            assert_eq!(get_release_title("3.4.1"), "Hotfix");
        }

        #[test]
        #[serial]
        fn version_default() {
            std::env::remove_var("RELEASE_VERSION");
            assert_eq!(get_release_version(), "unknown");
        }
    }

    mod get_changelog_path {
        use super::*;

        #[test]
        #[serial]
        fn default() {
            std::env::remove_var("CHANGELOG_FILE");
            assert_eq!(get_changelog_path(), PathBuf::from("CHANGELOG.md"));
        }

        #[test]
        #[serial]
        fn custom() {
            std::env::set_var("CHANGELOG_FILE", "docs/CHANGES.md");
            assert_eq!(get_changelog_path(), PathBuf::from("docs/CHANGES.md"));
        }
    }

    mod load_config {
        use super::*;

        #[test]
        #[serial]
        fn defaults() {
            clear(&CONFIG_VARS);
            let config = load_config("https://example.com/hook".to_string());
            assert_eq!(config.webhook_url, "https://example.com/hook");
            assert_eq!(config.username, "BreweryX Updates");
            assert_eq!(config.content.as_deref(), Some("@everyone"));
            assert_eq!(config.color, "F5E083");
            assert_eq!(config.thumbnail_url.as_deref(), Some("https://github.com/breweryteam.png"));
            assert_eq!(config.image_url, None);
        }

        #[test]
        #[serial]
        fn custom_avatar_is_default_thumbnail() {
            clear(&CONFIG_VARS);
            std::env::set_var("WEBHOOK_AVATAR_URL", "https://example.com/avatar.png");
            std::env::set_var("EMBED_COLOR", "#29A44C");
            std::env::set_var("EMBED_IMAGE_URL", "https://example.com/banner.png");

            let config = load_config("https://example.com/hook".to_string());
            assert_eq!(config.avatar_url, "https://example.com/avatar.png");
            assert_eq!(config.thumbnail_url.as_deref(), Some("https://example.com/avatar.png"));
            assert_eq!(config.color, "#29A44C");
            assert_eq!(config.image_url.as_deref(), Some("https://example.com/banner.png"));
        }

        #[test]
        #[serial]
        fn default_thumbnail_disabled() {
            clear(&CONFIG_VARS);
            std::env::set_var("EMBED_DEFAULT_THUMBNAIL", "FALSE");
            let config = load_config("https://example.com/hook".to_string());
            assert_eq!(config.thumbnail_url, None);
        }

        #[test]
        #[serial]
        fn explicit_thumbnail_wins() {
            clear(&CONFIG_VARS);
            std::env::set_var("EMBED_DEFAULT_THUMBNAIL", "false");
            std::env::set_var("EMBED_THUMBNAIL_URL", "https://example.com/thumb.png");
            let config = load_config("https://example.com/hook".to_string());
            assert_eq!(config.thumbnail_url.as_deref(), Some("https://example.com/thumb.png"));
        }
    }
}
