//! Assistant configuration.
//!
//! Loaded from `config.toml` when present, then overridden by environment
//! variables. Defaults match the production marketing site.

use serde::{Deserialize, Serialize};

const CONFIG_FILE_PATH: &str = "config.toml";

const DEFAULT_ORG_NAME: &str = "Bertera Niaga Global";
const DEFAULT_CHANNEL_BASE_URL: &str = "https://wa.me";
const DEFAULT_DESTINATION_ID: &str = "6285156113241";
const DEFAULT_GREETING: &str = "Hello! I'm Terra, your AI assistant from Bertera Niaga Global. How can I help you with our 'forest friends' coffee today?";
const DEFAULT_FALLBACK_OPENER: &str = "Hello Bertera Niaga Global, I'd like to learn more.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Base URL of the generation backend. None means the client falls back
    /// on every turn (still fully functional, just degraded).
    pub api_base: Option<String>,
    /// Organization name embedded in fallback hand-off templates.
    pub org_name: String,
    /// Assistant greeting appended once, on first widget open.
    pub greeting: String,
    /// Base URL of the external messaging channel.
    pub channel_base_url: String,
    /// Fixed destination identifier on the channel (e.g. a phone number).
    pub destination_id: String,
    /// Opener text used when no suggested hand-off message is available.
    pub fallback_opener: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantConfig {
    pub fn new() -> Self {
        let mut config = Self::baseline();

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                if let Ok(file_config) = toml::from_str::<AssistantConfig>(&content) {
                    config = file_config;
                }
            }
        }

        // Override with environment variables if they exist
        if let Ok(api_base) = std::env::var("ASSIST_API_BASE") {
            config.api_base = Some(api_base);
        }
        if let Ok(org_name) = std::env::var("ASSIST_ORG_NAME") {
            config.org_name = org_name;
        }
        if let Ok(greeting) = std::env::var("ASSIST_GREETING") {
            config.greeting = greeting;
        }
        if let Ok(base) = std::env::var("ASSIST_CHANNEL_BASE_URL") {
            config.channel_base_url = base;
        }
        if let Ok(destination) = std::env::var("ASSIST_DESTINATION_ID") {
            config.destination_id = destination;
        }
        if let Ok(opener) = std::env::var("ASSIST_FALLBACK_OPENER") {
            config.fallback_opener = opener;
        }
        config
    }

    /// Built-in defaults, with no file or environment input.
    pub fn baseline() -> Self {
        Self {
            api_base: None,
            org_name: DEFAULT_ORG_NAME.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            channel_base_url: DEFAULT_CHANNEL_BASE_URL.to_string(),
            destination_id: DEFAULT_DESTINATION_ID.to_string(),
            fallback_opener: DEFAULT_FALLBACK_OPENER.to_string(),
        }
    }
}
