use thiserror::Error;

use crate::catalog::NotFound;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Category '{}' not found", .0.input)]
    CategoryNotFound(NotFound),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    #[error("No results found for keyword '{0}'")]
    NoResults(String),

    #[error("Store error: {message}")]
    Api { message: String },
}

pub type Result<T> = std::result::Result<T, ScraperError>;
