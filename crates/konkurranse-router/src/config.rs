//! Configuration file parsing for the Router.
//!
//! Loads settings from TOML files: bind address, data file location, model
//! endpoint and page fetcher limits. The API key never lives in the file.

use konkurranse_scraper::ScraperConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the bind port
pub const PORT_VAR: &str = "PORT";

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 3001)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// JSON file holding saved competitions
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Language model settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Page fetcher settings
    #[serde(default)]
    pub scraper: ScraperConfig,
}

/// Language model settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API base URL
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Per-call timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: konkurranse_llm::openai::DEFAULT_ENDPOINT.to_string(),
            model: konkurranse_llm::openai::DEFAULT_MODEL.to_string(),
            timeout_secs: konkurranse_llm::openai::DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_bind_port() -> u16 {
    3001
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/competitions.json")
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            data_file: default_data_file(),
            llm: LlmConfig::default(),
            scraper: ScraperConfig::default(),
        }
    }
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: RouterConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::Invalid("llm.model cannot be empty".to_string()));
        }
        self.scraper
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("scraper: {}", e)))
    }

    /// Apply a `PORT` value, if one is set and numeric
    pub fn with_port_override(mut self, port: Option<String>) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            self.bind_port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{} is not a valid port", port)))?;
        }
        Ok(self)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
