use crate::error::NotifyError;
use crate::notifier::ReleaseNotifier;
use crate::send::DeliveryResult;
use crate::{changelog, env};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `DISCORD_WEBHOOK` was not set, nothing was sent.
    Skipped,
    Delivered(DeliveryResult),
}

/// One release announcement driven entirely by the process environment.
pub async fn run() -> Result<Outcome, NotifyError> {
    // nothing to announce to without a webhook
    let Some(webhook_url) = env::get_webhook_url() else {
        tracing::info!("DISCORD_WEBHOOK is not set, skipping release announcement");
        return Ok(Outcome::Skipped);
    };

    let version = env::get_release_version();
    let title = env::get_release_title(&version);
    let description = changelog::read_changelog(env::get_changelog_override(), &env::get_changelog_path(), &version)?;

    let notifier = ReleaseNotifier::new(env::load_config(webhook_url));
    let result = notifier.notify(title, description).await?;
    if let DeliveryResult::Failure(status) = result {
        // a failed announcement doesn't fail the release
        tracing::warn!("Release announcement was not accepted ({}), continuing", status);
    }

    Ok(Outcome::Delivered(result))
}
