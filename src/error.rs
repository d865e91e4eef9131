use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid embed color {0:?}, expected a hex color code like F5E083")]
    Format(String),

    #[error("webhook endpoint is empty")]
    MissingEndpoint,

    #[error("failed to send webhook: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to read changelog: {0}")]
    Changelog(#[from] std::io::Error),
}
