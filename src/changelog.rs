use std::path::Path;

use crate::error::NotifyError;

pub const NO_CHANGELOG: &str = "No Changelog found.";
const VERSION_PLACEHOLDER: &str = "${version}";

/// Picks the override text, then the changelog file, then a placeholder,
/// and fills in `${version}`.
pub fn read_changelog(override_text: Option<String>, path: &Path, version: &str) -> Result<String, NotifyError> {
    let text = match override_text {
        Some(text) => {
            tracing::debug!("Using changelog override from environment");
            text
        }
        None if path.exists() => {
            tracing::debug!("Reading changelog from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            tracing::warn!("No changelog found at {}", path.display());
            NO_CHANGELOG.to_string()
        }
    };

    Ok(text.replace(VERSION_PLACEHOLDER, version))
}
