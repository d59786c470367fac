use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("salesforce.username is required")]
    MissingUsername,

    #[error("salesforce.password is required")]
    MissingPassword,

    #[error("salesforce.client_id is required")]
    MissingClientId,

    #[error("salesforce.client_secret is required")]
    MissingClientSecret,

    #[error("salesforce.login_url cannot be empty")]
    EmptyLoginUrl,

    #[error("salesforce.timeout_secs must be at least 1")]
    InvalidTimeout,

    #[error("database.url cannot be empty")]
    EmptyDatabaseUrl,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. leadconvert.yaml in the working directory
    /// 3. Environment variables (LEADCONVERT_* prefix, highest priority)
    ///
    /// A missing credential is a fatal startup error: the run must fail
    /// before any item is processed.
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("leadconvert.yaml"))
            .merge(Env::prefixed("LEADCONVERT_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("LEADCONVERT_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.salesforce.username.is_empty() {
            return Err(ConfigError::MissingUsername);
        }
        if config.salesforce.password.is_empty() {
            return Err(ConfigError::MissingPassword);
        }
        if config.salesforce.client_id.is_empty() {
            return Err(ConfigError::MissingClientId);
        }
        if config.salesforce.client_secret.is_empty() {
            return Err(ConfigError::MissingClientSecret);
        }
        if config.salesforce.login_url.is_empty() {
            return Err(ConfigError::EmptyLoginUrl);
        }
        if config.salesforce.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        // security_token is intentionally not required: token-less logins
        // from trusted networks are a supported remote configuration.

        if config.database.url.is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
