use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::types::RawApp;

/// One search request against the store.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub term: String,
    /// Canonical category id, when the search runs on behalf of a category.
    pub category: Option<String>,
    pub n_hits: u32,
    pub lang: String,
    pub country: String,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, n_hits: u32, store: &StoreConfig) -> Self {
        Self {
            term: term.into(),
            category: None,
            n_hits,
            lang: store.lang.clone(),
            country: store.country.clone(),
        }
    }

    pub fn with_category(mut self, canonical_id: &str) -> Self {
        self.category = Some(canonical_id.to_string());
        self
    }
}

// Store-side port: keyword search returning raw app records.
#[async_trait]
pub trait StoreSearchPort: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawApp>>;
}
