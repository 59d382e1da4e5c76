//! Configuration loading and management for summa-view.
//!
//! Loads settings from `summa-view.toml` with an environment variable override
//! for the endpoint. Every section has defaults, so the file is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// File name looked up in the current directory and the user config dir
const CONFIG_FILE: &str = "summa-view.toml";

/// Environment variable replacing `endpoint.base_url`
pub const ENDPOINT_ENV: &str = "SUMMA_VIEW_ENDPOINT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where the summarisation endpoint lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Scheme, host and port of the server
    pub base_url: String,
    /// Route of the summarize handler
    pub path: String,
    /// Request timeout; unset means the request may wait indefinitely
    pub timeout_secs: Option<u64>,
}

impl EndpointConfig {
    /// Full URL requests are posted to
    pub fn url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.path)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            path: "/summarize".to_string(),
            timeout_secs: None,
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Directory holding the TUI log file
    pub path: PathBuf,
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./logs"),
            level: "info".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from the default location (summa-view.toml in cwd or home)
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Parse configuration text without consulting the environment
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env(&mut self) {
        if let Ok(base_url) = std::env::var(ENDPOINT_ENV) {
            if !base_url.is_empty() {
                self.endpoint.base_url = base_url;
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        let home_config = dirs::home_dir()?
            .join(".config")
            .join("summa-view")
            .join(CONFIG_FILE);
        home_config.exists().then_some(home_config)
    }
}
