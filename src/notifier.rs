use crate::error::NotifyError;
use crate::send::{send_post_request, DeliveryResult};
use crate::structs::discord::{build_payload, DiscordWebhook};
use crate::structs::release::{Announcement, NotifierConfig};

pub struct ReleaseNotifier {
    config: NotifierConfig,
}

impl ReleaseNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    pub fn announcement(&self, title: impl Into<String>, description: impl Into<String>) -> Announcement {
        Announcement::new(&self.config, title, description)
    }

    pub fn build(&self, title: impl Into<String>, description: impl Into<String>) -> Result<DiscordWebhook, NotifyError> {
        build_payload(self.config.webhook_url.clone(), self.announcement(title, description))
    }

    /// Builds and sends in one go. An invalid color fails here without touching the network.
    pub async fn notify(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<DeliveryResult, NotifyError> {
        let webhook = self.build(title, description)?;
        send_post_request(webhook).await
    }
}
