//! Question notifier configuration.

use config::ConfigError;
use serde::Deserialize;

/// Endpoint notified once per listed question.
pub const DEFAULT_NOTIFIER_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbwRVDKt5ApSadrc04rBUEugnWxNmY6iHpMgLxScBSamPmHmCzxl/exec";

/// Outbound notifier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    /// Whether listed questions are forwarded to the endpoint at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Endpoint URL; the description URL is appended as the `docUrl` query parameter.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_NOTIFIER_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl NotifierConfig {
    /// Validate the notifier configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the notifier is enabled with an unusable endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.enabled {
            return Ok(());
        }
        url::Url::parse(&self.endpoint).map_err(|e| {
            ConfigError::Message(format!("notifier.endpoint is not a valid URL: {e}"))
        })?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "notifier.timeout_secs cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
