use reqwest::{Client, StatusCode};

use crate::error::NotifyError;
use crate::structs::discord::DiscordWebhook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryResult {
    Success,
    Failure(StatusCode),
}

impl DeliveryResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DeliveryResult::Success)
    }
}

/// Posts the webhook once. Anything other than 200 is reported as a `Failure`
/// rather than an error; transport errors are returned as `NotifyError::Network`.
pub async fn send_post_request(webhook: DiscordWebhook) -> Result<DeliveryResult, NotifyError> {
    let DiscordWebhook { url, body } = webhook;
    tracing::info!(
        "Sending release announcement as {} with {} embed(s)",
        body.username,
        body.embeds.len()
    );

    let client = Client::new();
    let response = match client.post(&url).json(&body).send().await {
        Ok(response) => response,
        Err(e) => {
            // the webhook url carries its token
            let e = e.without_url();
            tracing::error!("Failed to send POST request to webhook. Error: {:?}", e);
            return Err(NotifyError::Network(e));
        }
    };

    let status = response.status();
    if status == StatusCode::OK {
        tracing::info!("Release announcement sent successfully");
        Ok(DeliveryResult::Success)
    } else {
        tracing::error!(
            "Failed to send release announcement. Status: {}, payload: {:?}",
            status,
            body
        );
        Ok(DeliveryResult::Failure(status))
    }
}
