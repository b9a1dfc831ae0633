use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use reqwest::Url;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {field} URL '{value}': {reason}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("credentials.override_env cannot be empty")]
    EmptyOverrideEnv,

    #[error("credentials.key_constant cannot be empty")]
    EmptyKeyConstant,

    #[error("Invalid cache_ttl_secs: 0. Must be at least 1, or unset for no expiry")]
    ZeroCacheTtl,

    #[error("Invalid character_limit: {0}. Must be at least 1")]
    InvalidCharacterLimit(usize),

    #[error("Invalid page sizes: default_page_size ({0}) must be between 1 and max_page_size ({1})")]
    InvalidPageSize(u32, u32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .systembolaget-mcp/config.yaml (project config)
    /// 3. .systembolaget-mcp/local.yaml (project local overrides, optional)
    /// 4. Environment variables (SYSTEMBOLAGET_MCP_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Self::base()
            .merge(Yaml::file(".systembolaget-mcp/config.yaml"))
            .merge(Yaml::file(".systembolaget-mcp/local.yaml"))
            .merge(Env::prefixed("SYSTEMBOLAGET_MCP_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Self::base()
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("SYSTEMBOLAGET_MCP_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(Config::default()))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Validate upstream config
        validate_url("upstream.api_base_url", &config.upstream.api_base_url)?;
        validate_url("upstream.website_url", &config.upstream.website_url)?;

        if config.upstream.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.upstream.timeout_secs));
        }

        // Validate credentials config
        if config.credentials.override_env.trim().is_empty() {
            return Err(ConfigError::EmptyOverrideEnv);
        }

        if config.credentials.key_constant.trim().is_empty() {
            return Err(ConfigError::EmptyKeyConstant);
        }

        if config.credentials.cache_ttl_secs == Some(0) {
            return Err(ConfigError::ZeroCacheTtl);
        }

        // Validate output config
        if config.output.character_limit == 0 {
            return Err(ConfigError::InvalidCharacterLimit(
                config.output.character_limit,
            ));
        }

        let output = &config.output;
        if output.default_page_size == 0 || output.default_page_size > output.max_page_size {
            return Err(ConfigError::InvalidPageSize(
                output.default_page_size,
                output.max_page_size,
            ));
        }

        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }
    Ok(())
}
