// prompt-dispatcher-rs/src/settings.rs
//
// Startup configuration for the dispatcher service
//
// Configuration (.env file):
// - GEMINI_API_KEY: credential for the Gemini API (read per request, see dispatcher.rs)
// - GEMINI_API_URL: base URL of the models collection
// - GEMINI_MODEL: model segment of the generateContent endpoint
// - GEMINI_TIMEOUT_SECS: outbound request timeout; transport default when unset
// - DISPATCHER_MAX_BODY_BYTES: inbound request body limit
// - DISPATCHER_SERVICE_PORT / DISPATCHER_SERVICE_ADDR: bind address (config-rs)

use std::time::Duration;

use config_rs::{ConfigError, ConfigProvider};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_URL_VAR: &str = "GEMINI_API_URL";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";
pub const MAX_BODY_VAR: &str = "DISPATCHER_MAX_BODY_BYTES";

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Where and how the outbound generateContent call is made
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl UpstreamSettings {
    /// Full generateContent URL, without the credential
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherSettings {
    pub upstream: UpstreamSettings,
    pub max_body_bytes: usize,
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            upstream: UpstreamSettings::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl DispatcherSettings {
    /// Read settings from `provider`, falling back to defaults for unset
    /// keys. Values that are set but unparsable are an error.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Result<Self, ConfigError> {
        let upstream = UpstreamSettings {
            base_url: provider.get_string_or(API_URL_VAR, DEFAULT_API_URL),
            model: provider.get_string_or(MODEL_VAR, DEFAULT_MODEL),
            timeout: provider.get_parsed::<u64>(TIMEOUT_VAR)?.map(Duration::from_secs),
        };

        let max_body_bytes = provider.get_parsed(MAX_BODY_VAR)?.unwrap_or(DEFAULT_MAX_BODY_BYTES);

        Ok(Self {
            upstream,
            max_body_bytes,
        })
    }
}
