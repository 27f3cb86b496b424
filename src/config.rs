use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{
    DEEP_SCAN_HITS, DEFAULT_CONFIG_PATH, DEFAULT_COUNTRY, DEFAULT_HOST, DEFAULT_LANG,
    DEFAULT_LOG_DIR, DEFAULT_PORT, DEFAULT_STORE_BASE_URL, DEFAULT_STORE_TIMEOUT_SECS,
    PER_KEYWORD_HITS,
};
use crate::error::{Result, ScraperError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the external search service that fronts the Play Store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub lang: String,
    pub country: String,
    pub per_keyword_hits: u32,
    pub deep_scan_hits: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_STORE_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            per_keyword_hits: PER_KEYWORD_HITS,
            deep_scan_hits: DEEP_SCAN_HITS,
            timeout_seconds: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_LOG_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `config.toml` when it exists,
    /// then apply environment overrides. Missing files fall back to defaults
    /// unless the path was given explicitly.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT`, `STORE_BASE_URL`, `STORE_TIMEOUT_SECONDS` and
    /// `LOG_DIR` from `lookup` on top of the current values.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_var("PORT", &port)?;
        }
        if let Some(url) = lookup("STORE_BASE_URL") {
            self.store.base_url = url;
        }
        if let Some(secs) = lookup("STORE_TIMEOUT_SECONDS") {
            self.store.timeout_seconds = parse_var("STORE_TIMEOUT_SECONDS", &secs)?;
        }
        if let Some(dir) = lookup("LOG_DIR") {
            self.logging.dir = dir;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.store.base_url.trim().is_empty() {
            return Err(ScraperError::Config("store.base_url must not be empty".into()));
        }
        if self.store.per_keyword_hits == 0 || self.store.deep_scan_hits == 0 {
            return Err(ScraperError::Config("store hit counts must be positive".into()));
        }
        if self.store.timeout_seconds == 0 {
            return Err(ScraperError::Config("store.timeout_seconds must be positive".into()));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ScraperError::Config(format!("{name} has an invalid value '{value}'")))
}
