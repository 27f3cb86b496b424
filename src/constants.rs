/// Service-wide constants shared by the directory, the store client and the HTTP layer.

pub const SERVICE_NAME: &str = "US Play Store Scraper API";
pub const SERVICE_DESCRIPTION: &str =
    "Scrape apps and games from the US Google Play Store";

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

// Store defaults (the store is always queried as the US/English storefront)
pub const DEFAULT_STORE_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_COUNTRY: &str = "us";
pub const PER_KEYWORD_HITS: u32 = 200;
pub const DEEP_SCAN_HITS: u32 = 500;
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

// Scrape endpoint limits
pub const DEFAULT_SCRAPE_LIMIT: usize = 200;
pub const MIN_SCRAPE_LIMIT: usize = 1;
pub const MAX_SCRAPE_LIMIT: usize = 1000;

/// Apps rated below this are reported by `underperforming_only`.
pub const UNDERPERFORMING_THRESHOLD: f64 = 4.0;

/// Deep scan keeps ratings in `[DEEP_SCAN_MIN_SCORE, DEEP_SCAN_MAX_SCORE)`.
pub const DEEP_SCAN_MIN_SCORE: f64 = 3.0;
pub const DEEP_SCAN_MAX_SCORE: f64 = 4.0;

/// Upper bound on suggestions attached to a category miss.
pub const MAX_SUGGESTIONS: usize = 5;

/// Canonical ids of game categories start with this prefix.
pub const GAME_PREFIX: &str = "GAME_";

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
