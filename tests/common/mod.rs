#![allow(dead_code)]

use async_trait::async_trait;
use playstore_scraper::app::{SearchQuery, StoreSearchPort};
use playstore_scraper::error::{Result, ScraperError};
use playstore_scraper::types::RawApp;
use tokio::sync::Mutex;

/// In-memory store that returns the same records for every search.
pub struct FakeStore {
    pub apps: Vec<RawApp>,
    pub fail: bool,
    pub queries: Mutex<Vec<SearchQuery>>,
}

impl FakeStore {
    pub fn with_apps(apps: Vec<RawApp>) -> Self {
        Self {
            apps,
            fail: false,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            apps: Vec::new(),
            fail: true,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl StoreSearchPort for FakeStore {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawApp>> {
        self.queries.lock().await.push(query.clone());
        if self.fail {
            return Err(ScraperError::Api {
                message: "search service unavailable".to_string(),
            });
        }
        Ok(self.apps.clone())
    }
}

pub fn raw_app(id: &str, title: &str, score: Option<f64>) -> RawApp {
    RawApp {
        app_id: Some(id.to_string()),
        title: Some(title.to_string()),
        score,
        developer: Some("Example Studio".to_string()),
        price: Some(0.0),
        icon: Some(format!("https://play-lh.googleusercontent.com/{id}")),
        installs: Some("100,000+".to_string()),
        summary: Some(format!("{title} summary")),
        ..Default::default()
    }
}
