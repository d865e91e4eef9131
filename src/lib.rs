pub mod changelog;
pub mod env;
pub mod error;
pub mod notifier;
pub mod run;
pub mod send;
pub mod structs;

pub use error::NotifyError;
pub use notifier::ReleaseNotifier;
pub use run::{run, Outcome};
pub use send::{send_post_request, DeliveryResult};
pub use structs::discord::{build_payload, DiscordWebhook, DiscordWebhookBody, Embed, MAX_EMBED_DESCRIPTION_LENGTH};
pub use structs::release::{Announcement, NotifierConfig};
