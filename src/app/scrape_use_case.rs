use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::app::ports::{SearchQuery, StoreSearchPort};
use crate::catalog::{keyword_variants, Category};
use crate::config::StoreConfig;
use crate::constants::{
    DEFAULT_SCRAPE_LIMIT, MAX_SCRAPE_LIMIT, MIN_SCRAPE_LIMIT, UNDERPERFORMING_THRESHOLD,
};
use crate::error::{Result, ScraperError};
use crate::types::{AppSummary, RawApp, ScrapeResponse};

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub limit: usize,
    pub underperforming_only: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SCRAPE_LIMIT,
            underperforming_only: false,
        }
    }
}

impl ScrapeOptions {
    pub fn new(limit: Option<usize>, underperforming_only: bool) -> Result<Self> {
        let limit = limit.unwrap_or(DEFAULT_SCRAPE_LIMIT);
        if !(MIN_SCRAPE_LIMIT..=MAX_SCRAPE_LIMIT).contains(&limit) {
            return Err(ScraperError::InvalidQuery(format!(
                "limit must be between {MIN_SCRAPE_LIMIT} and {MAX_SCRAPE_LIMIT}, got {limit}"
            )));
        }
        Ok(Self {
            limit,
            underperforming_only,
        })
    }
}

/// Raw and deduplicated results of a multi-keyword category search.
#[derive(Debug, Default)]
pub struct GatheredResults {
    pub raw_count: usize,
    pub unique: Vec<RawApp>,
}

/// Use case for scraping one category through several keyword searches.
pub struct ScrapeUseCase {
    store: Arc<dyn StoreSearchPort>,
    settings: StoreConfig,
}

impl ScrapeUseCase {
    pub fn new(store: Arc<dyn StoreSearchPort>, settings: StoreConfig) -> Self {
        Self { store, settings }
    }

    /// Search every keyword variant of `category` and dedupe by app id.
    ///
    /// A failing keyword is logged and skipped; the gather only fails when
    /// every keyword failed.
    #[instrument(skip(self, category), fields(category = category.key))]
    pub async fn gather(&self, category: &Category) -> Result<GatheredResults> {
        let keywords = keyword_variants(category);
        let mut gathered = GatheredResults::default();
        let mut seen: HashSet<String> = HashSet::new();
        let mut last_error = None;
        let mut failures = 0usize;

        for keyword in &keywords {
            info!("[SCRAPE] category={} keyword='{}'", category.key, keyword);
            let query = SearchQuery::new(keyword.as_str(), self.settings.per_keyword_hits, &self.settings)
                .with_category(category.canonical_id);

            let batch = match self.store.search(&query).await {
                Ok(batch) => batch,
                Err(e) => {
                    warn!("[SCRAPE_ERROR] keyword='{}' error={}", keyword, e);
                    failures += 1;
                    last_error = Some(e);
                    continue;
                }
            };

            gathered.raw_count += batch.len();
            for app in batch {
                let Some(app_id) = app.app_id.clone().filter(|id| !id.is_empty()) else {
                    continue;
                };
                if seen.insert(app_id) {
                    gathered.unique.push(app);
                }
            }
        }

        if failures == keywords.len() {
            if let Some(err) = last_error {
                return Err(err);
            }
        }
        Ok(gathered)
    }

    /// Gather, filter, reshape and truncate results for `category`.
    pub async fn run(&self, category: &Category, options: &ScrapeOptions) -> Result<ScrapeResponse> {
        let gathered = self.gather(category).await?;

        let apps: Vec<AppSummary> = gathered
            .unique
            .iter()
            .filter(|app| !options.underperforming_only || is_underperforming(app))
            .filter_map(AppSummary::from_raw)
            .take(options.limit)
            .collect();

        info!(
            "[SCRAPE_DONE] category={} raw={} unique={} returned={}",
            category.key,
            gathered.raw_count,
            gathered.unique.len(),
            apps.len()
        );
        crate::observability::metrics::scrape::apps_returned(apps.len());

        Ok(ScrapeResponse {
            category: category.key.to_string(),
            canonical_id: category.canonical_id.to_string(),
            is_game: category.is_game(),
            total_raw_collected: gathered.raw_count,
            total_unique_after_dedup: gathered.unique.len(),
            count: apps.len(),
            apps,
        })
    }
}

fn is_underperforming(app: &RawApp) -> bool {
    app.score
        .map(|score| score < UNDERPERFORMING_THRESHOLD)
        .unwrap_or(false)
}
