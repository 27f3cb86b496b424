use std::sync::Arc;

use tracing::{info, instrument};

use crate::app::ports::{SearchQuery, StoreSearchPort};
use crate::config::StoreConfig;
use crate::constants::{DEEP_SCAN_MAX_SCORE, DEEP_SCAN_MIN_SCORE};
use crate::error::{Result, ScraperError};
use crate::types::{DeepScanApp, DeepScanResponse};

/// Use case for finding mid/low-rated apps behind a single keyword.
pub struct DeepScanUseCase {
    store: Arc<dyn StoreSearchPort>,
    settings: StoreConfig,
}

impl DeepScanUseCase {
    pub fn new(store: Arc<dyn StoreSearchPort>, settings: StoreConfig) -> Self {
        Self { store, settings }
    }

    /// Keep apps rated in `[3.0, 4.0)`, worst first. Unrated apps (missing
    /// or zero score) never qualify.
    #[instrument(skip(self))]
    pub async fn run(&self, keyword: &str) -> Result<DeepScanResponse> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ScraperError::InvalidInput("Keyword cannot be empty".into()));
        }

        info!(
            "[DEEP_SCAN] keyword='{}' country='{}' lang='{}' n_hits={}",
            keyword, self.settings.country, self.settings.lang, self.settings.deep_scan_hits
        );
        let query = SearchQuery::new(keyword, self.settings.deep_scan_hits, &self.settings);
        let results = self.store.search(&query).await?;
        if results.is_empty() {
            return Err(ScraperError::NoResults(keyword.to_string()));
        }

        let mut apps: Vec<DeepScanApp> = results
            .iter()
            .filter_map(|raw| {
                let score = raw.score.filter(|s| *s != 0.0)?;
                (DEEP_SCAN_MIN_SCORE..DEEP_SCAN_MAX_SCORE)
                    .contains(&score)
                    .then(|| DeepScanApp::from_raw(raw, score))
            })
            .collect();
        apps.sort_by(|a, b| a.score.total_cmp(&b.score));

        info!(
            "[DEEP_SCAN] keyword='{}' scanned={} low_rated={}",
            keyword,
            results.len(),
            apps.len()
        );

        Ok(DeepScanResponse {
            keyword_searched: keyword.to_string(),
            total_apps_scanned: results.len(),
            low_rated_apps_count: apps.len(),
            apps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawApp;
    use async_trait::async_trait;

    struct FixedStore(Vec<RawApp>);

    #[async_trait]
    impl StoreSearchPort for FixedStore {
        async fn search(&self, query: &SearchQuery) -> Result<Vec<RawApp>> {
            assert_eq!(query.n_hits, 500);
            assert!(query.category.is_none());
            Ok(self.0.clone())
        }
    }

    fn scored(id: &str, score: Option<f64>) -> RawApp {
        RawApp {
            app_id: Some(id.to_string()),
            score,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_keeps_three_to_four_sorted_ascending() {
        let store = FixedStore(vec![
            scored("com.high", Some(4.0)),
            scored("com.mid", Some(3.8)),
            scored("com.unrated", Some(0.0)),
            scored("com.none", None),
            scored("com.low", Some(2.9)),
            scored("com.edge", Some(3.0)),
        ]);
        let use_case = DeepScanUseCase::new(Arc::new(store), StoreConfig::default());

        let response = use_case.run("  vpn ").await.unwrap();
        assert_eq!(response.keyword_searched, "vpn");
        assert_eq!(response.total_apps_scanned, 6);
        assert_eq!(response.low_rated_apps_count, 2);
        let ids: Vec<&str> = response.apps.iter().map(|a| a.app_id.as_str()).collect();
        assert_eq!(ids, vec!["com.edge", "com.mid"]);
    }

    #[tokio::test]
    async fn test_empty_keyword_is_rejected() {
        let use_case = DeepScanUseCase::new(Arc::new(FixedStore(vec![])), StoreConfig::default());
        let err = use_case.run("   ").await.unwrap_err();
        assert!(matches!(err, ScraperError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_no_results_is_reported() {
        let use_case = DeepScanUseCase::new(Arc::new(FixedStore(vec![])), StoreConfig::default());
        let err = use_case.run("antivirus").await.unwrap_err();
        assert!(matches!(err, ScraperError::NoResults(k) if k == "antivirus"));
    }
}
