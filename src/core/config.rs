//! Configuration management for the company search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{CompanyError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application name used for the XDG config directory
const APP_NAME: &str = "company-search";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub elasticsearch: ElasticsearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Search engine connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElasticsearchConfig {
    /// Engine host name
    #[serde(default = "default_es_host")]
    pub host: String,

    /// Engine HTTP port
    #[serde(default = "default_es_port")]
    pub port: u16,

    /// Connect and socket timeout in seconds
    #[serde(default = "default_es_timeout")]
    pub timeout_sec: u64,

    /// Index holding company records
    #[serde(default = "default_index")]
    pub index: String,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,

    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Query configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Server-side timeout attached to every search, in seconds
    #[serde(default = "default_search_timeout")]
    pub timeout_sec: u64,

    /// Page size for range and filter searches
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Log output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LogConfig {
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_es_host() -> String {
    "localhost".to_string()
}

fn default_es_port() -> u16 {
    9200
}

fn default_es_timeout() -> u64 {
    60
}

fn default_index() -> String {
    "company".to_string()
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_search_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    5
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            host: default_es_host(),
            port: default_es_port(),
            timeout_sec: default_es_timeout(),
            index: default_index(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_sec: default_search_timeout(),
            page_size: default_page_size(),
        }
    }
}

impl ElasticsearchConfig {
    /// Base URL of the engine, without trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}

impl SearchConfig {
    /// Timeout in the engine's time-unit syntax (e.g. `30s`)
    pub fn timeout_value(&self) -> String {
        format!("{}s", self.timeout_sec)
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CompanyError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Path of the per-user config file (`~/.config/company-search/config.toml`)
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. COMPANY_SEARCH_CONFIG env var
    /// 2. User config file (~/.config/company-search/config.toml)
    /// 3. ./company-search.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("COMPANY_SEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            match Self::user_config_file() {
                Some(path) if path.exists() => Self::from_file(path)?,
                _ if Path::new("company-search.toml").exists() => {
                    Self::from_file("company-search.toml")?
                }
                _ => Self::default(),
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Search engine connection
        if let Ok(host) = env::var("ELASTICSEARCH_HOST") {
            if !host.trim().is_empty() {
                self.elasticsearch.host = host;
            }
        }
        if let Ok(port) = env::var("ELASTICSEARCH_PORT") {
            if let Ok(p) = port.parse() {
                self.elasticsearch.port = p;
            }
        }
        if let Ok(timeout) = env::var("ELASTICSEARCH_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.elasticsearch.timeout_sec = t;
            }
        }
        if let Ok(index) = env::var("ELASTICSEARCH_INDEX") {
            if !index.trim().is_empty() {
                self.elasticsearch.index = index;
            }
        }

        // HTTP listener
        if let Ok(host) = env::var("COMPANY_SEARCH_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("COMPANY_SEARCH_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Queries
        if let Ok(timeout) = env::var("COMPANY_SEARCH_SEARCH_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.search.timeout_sec = t;
            }
        }
        if let Ok(size) = env::var("COMPANY_SEARCH_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.search.page_size = s;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.elasticsearch.host.trim().is_empty() {
            return Err(CompanyError::ConfigError(
                "Elasticsearch host must not be empty".to_string(),
            ));
        }

        if self.elasticsearch.port == 0 {
            return Err(CompanyError::ConfigError(
                "Elasticsearch port must be non-zero".to_string(),
            ));
        }

        if self.elasticsearch.timeout_sec == 0 {
            return Err(CompanyError::ConfigError(
                "Elasticsearch timeout must be non-zero".to_string(),
            ));
        }

        // Index names are lowercase in Elasticsearch and may not contain path separators
        let index = &self.elasticsearch.index;
        if index.is_empty() || index.contains('/') || index.chars().any(char::is_uppercase) {
            return Err(CompanyError::ConfigError(format!(
                "Invalid index name: '{index}'"
            )));
        }

        if self.search.timeout_sec == 0 {
            return Err(CompanyError::ConfigError(
                "Search timeout must be non-zero".to_string(),
            ));
        }

        if self.search.page_size == 0 {
            return Err(CompanyError::ConfigError(
                "Page size must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Elasticsearch: {}", self.elasticsearch.base_url());
        tracing::info!("  Index: {}", self.elasticsearch.index);
        tracing::info!("  Engine timeout: {}s", self.elasticsearch.timeout_sec);
        tracing::info!("  Search timeout: {}s", self.search.timeout_sec);
        tracing::info!("  Page size: {}", self.search.page_size);
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
    }
}
