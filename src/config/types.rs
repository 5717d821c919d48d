use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Books endpoint, queried once on startup.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Interface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language shown at startup ("english" or "urdu").
    #[serde(default)]
    pub default_language: Language,
    /// Event-loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_endpoint_url() -> String {
    "https://dev.iqrakitab.net/api/books".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}
