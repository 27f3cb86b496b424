use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use crate::app::ports::{SearchQuery, StoreSearchPort};
use crate::config::StoreConfig;
use crate::error::{Result, ScraperError};
use crate::observability::metrics::store;
use crate::types::{RawApp, SearchPayload};

/// Store search over HTTP against the external scraping service.
///
/// Issues `GET {base_url}/search?term=..&num=..&lang=..&country=..[&category=..]`
/// and expects a JSON array of app records (or `{"apps": [...]}`).
pub struct ReqwestStoreClient {
    client: reqwest::Client,
    search_url: String,
}

impl ReqwestStoreClient {
    pub fn new(settings: &StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(concat!("playstore_scraper/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            search_url: search_url(&settings.base_url),
        })
    }

    async fn fetch(&self, query: &SearchQuery) -> Result<Vec<RawApp>> {
        let num = query.n_hits.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("term", query.term.as_str()),
            ("num", num.as_str()),
            ("lang", query.lang.as_str()),
            ("country", query.country.as_str()),
        ];
        if let Some(category) = query.category.as_deref() {
            params.push(("category", category));
        }

        let resp = self.client.get(&self.search_url).query(&params).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ScraperError::Api {
                message: format!("search service returned {}: {}", status, body.trim()),
            });
        }

        let payload: SearchPayload = resp.json().await?;
        Ok(payload.into_apps())
    }
}

#[async_trait]
impl StoreSearchPort for ReqwestStoreClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawApp>> {
        let started = Instant::now();
        let result = self.fetch(query).await;
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(apps) => {
                debug!("store search term='{}' hits={} in {:.2}s", query.term, apps.len(), elapsed);
                store::request_success(elapsed);
            }
            Err(e) => {
                debug!("store search term='{}' failed after {:.2}s: {}", query.term, elapsed, e);
                store::request_error();
            }
        }
        result
    }
}

fn search_url(base_url: &str) -> String {
    format!("{}/search", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_tolerates_trailing_slash() {
        assert_eq!(search_url("http://localhost:3000/"), "http://localhost:3000/search");
        assert_eq!(search_url("http://localhost:3000"), "http://localhost:3000/search");
    }

    #[test]
    fn client_builds_from_default_settings() {
        assert!(ReqwestStoreClient::new(&StoreConfig::default()).is_ok());
    }
}
