//! handoff_dispatch - builds the external messaging channel deep link and
//! opens it in a new navigation context.
//!
//! Deep link shape: `<channel-base-url>/<destination-id>?text=<encoded>`.
//! Opening the channel is fire-and-forget; no response is ever read back.

use log::{info, warn};
use thiserror::Error;

use chat_core::config::AssistantConfig;

pub use url::Url;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid channel base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("channel base url cannot carry a destination path")]
    NotABaseUrl,
}

/// Builds and opens hand-off deep links for a fixed channel destination.
#[derive(Debug, Clone)]
pub struct HandoffDispatcher {
    channel_base: Url,
    destination_id: String,
    fallback_opener: String,
}

impl HandoffDispatcher {
    pub fn new(config: &AssistantConfig) -> Result<Self, DispatchError> {
        let channel_base = Url::parse(&config.channel_base_url)?;
        if channel_base.cannot_be_a_base() {
            return Err(DispatchError::NotABaseUrl);
        }
        Ok(Self {
            channel_base,
            destination_id: config.destination_id.clone(),
            fallback_opener: config.fallback_opener.clone(),
        })
    }

    /// Build the deep link for `message`, falling back to the fixed generic
    /// opener when no suggestion is available. The message is
    /// percent-encoded (spaces become `%20`, not `+`) so percent-decoding
    /// the `text` parameter recovers it byte-for-byte.
    pub fn handoff_url(&self, message: Option<&str>) -> Url {
        let resolved = message.unwrap_or(&self.fallback_opener);
        let mut url = self.channel_base.clone();
        url.path_segments_mut()
            .expect("base url validated at construction")
            .pop_if_empty()
            .push(&self.destination_id);
        let encoded = urlencoding::encode(resolved);
        url.set_query(Some(&format!("text={encoded}")));
        url
    }

    /// Resolve the message, open the deep link in a new navigation context,
    /// and return the URL. The caller closes the chat widget afterwards.
    ///
    /// Failure to open the channel is outside this system's responsibility
    /// and is only logged.
    pub fn dispatch(&self, message: Option<&str>) -> Url {
        let url = self.handoff_url(message);
        info!("opening hand-off channel for destination {}", self.destination_id);
        if let Err(err) = webbrowser::open(url.as_str()) {
            warn!("failed to open hand-off channel: {err}");
        }
        url
    }
}
