//! Configuration management module.
//!
//! Supports loading configuration from:
//! - A `.env` file in the working directory
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `QUESTION_SERVICE__<SECTION>__<KEY>` pattern
//! - The conventional `DATABASE_URL`, `PORT` and `HOST` variables

mod notifier;
mod server;
mod storage;

use std::net::IpAddr;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, Map};
use serde::Deserialize;

pub use notifier::NotifierConfig;
pub use server::ServerConfig;
pub use storage::{PostgresStorageConfig, StorageBackend, StorageConfig};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage backend configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Outbound question notifier configuration.
    #[serde(default)]
    pub notifier: NotifierConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{QUESTION_SERVICE_PROFILE}.toml` (if `QUESTION_SERVICE_PROFILE` is set)
    /// 3. Environment variables with `QUESTION_SERVICE__` prefix
    /// 4. `DATABASE_URL`, `PORT` and `HOST` (only when it is an IP address)
    ///
    /// A `.env` file, when present, is read into the process environment first.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case in production
        let _ = dotenvy::dotenv();

        let env: Map<String, String> = std::env::vars().collect();
        let profile = env
            .get("QUESTION_SERVICE_PROFILE")
            .map_or("development", String::as_str);

        let files = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false));

        Self::from_sources(files, &env)
    }

    /// Layer the given environment over already-added file sources, then
    /// deserialize and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed or the result is invalid.
    pub fn from_sources(
        files: ConfigBuilder<DefaultState>,
        env: &Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let port = env
            .get("PORT")
            .map(|raw| {
                raw.trim().parse::<u16>().map_err(|e| {
                    ConfigError::Message(format!("PORT must be a port number, got {raw:?}: {e}"))
                })
            })
            .transpose()?;

        // Platforms commonly export HOST as a hostname; only addresses are usable here
        let host = env
            .get("HOST")
            .and_then(|raw| raw.trim().parse::<IpAddr>().ok());

        let config = files
            // QUESTION_SERVICE__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("QUESTION_SERVICE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env.clone())),
            )
            .set_override_option("storage.postgresql.url", env.get("DATABASE_URL").cloned())?
            .set_override_option("server.port", port.map(i64::from))?
            .set_override_option("server.host", host.map(|ip| ip.to_string()))?
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.storage.validate()?;
        self.notifier.validate()?;

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
