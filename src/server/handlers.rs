use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use super::api_error::ApiError;
use super::AppState;
use crate::app::ScrapeOptions;
use crate::catalog::{self, Category, CategoryDirectory, Resolution};
use crate::constants::{MAX_SCRAPE_LIMIT, MIN_SCRAPE_LIMIT, SERVICE_DESCRIPTION, SERVICE_NAME};
use crate::error::ScraperError;
use crate::observability::metrics;
use crate::types::{
    CategoriesResponse, CategoryGroup, CategoryInfo, DeepScanResponse, ScrapeResponse,
};

#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    pub limit: Option<usize>,
    #[serde(default)]
    pub underperforming_only: bool,
}

/// Resolve a path segment, recording the outcome.
fn resolve_category(name: &str) -> Result<&'static Category, ApiError> {
    let resolution = catalog::resolve(name);
    match &resolution {
        Resolution::Resolved(_) => metrics::lookup::resolved(),
        Resolution::NotFound(_) => metrics::lookup::not_found(),
    }
    Ok(resolution.into_result()?)
}

/// Welcome payload with pointers to the other endpoints
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": format!("Welcome to {SERVICE_NAME}"),
        "description": SERVICE_DESCRIPTION,
        "endpoints": {
            "categories": "/categories",
            "category_lookup": "/categories/{category_name}",
            "scrape": "/scrape/{category_name}",
            "deep_scan": "/deep-scan/{keyword}",
            "health_check": "/health",
            "metrics": "/metrics",
        },
        "example_usage": "/scrape/action (for action games) or /scrape/productivity (for productivity apps)",
    }))
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn list_categories() -> Json<CategoriesResponse> {
    let directory = CategoryDirectory::global();
    let sorted_keys = |categories: Vec<&Category>| {
        let mut keys: Vec<String> = categories.iter().map(|c| c.key.to_string()).collect();
        keys.sort();
        CategoryGroup {
            count: keys.len(),
            categories: keys,
        }
    };

    Json(CategoriesResponse {
        total_categories: directory.len(),
        app_categories: sorted_keys(directory.apps().collect()),
        game_categories: sorted_keys(directory.games().collect()),
        usage: "Use these category names in the /scrape/{category_name} endpoint".to_string(),
    })
}

pub async fn lookup_category(Path(name): Path<String>) -> Result<Json<CategoryInfo>, ApiError> {
    let category = resolve_category(&name)?;
    Ok(Json(CategoryInfo::from(category)))
}

pub async fn scrape_category(
    State(state): State<AppState>,
    Path(category_name): Path<String>,
    params: Result<Query<ScrapeParams>, QueryRejection>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let category = resolve_category(&category_name)?;
    // Malformed values (`limit=-1`, `limit=abc`) get the same 422 as out-of-range ones.
    let Query(params) = params.map_err(|rejection| {
        ScraperError::InvalidQuery(format!(
            "limit must be an integer between {MIN_SCRAPE_LIMIT} and {MAX_SCRAPE_LIMIT} \
             and underperforming_only a boolean ({})",
            rejection.body_text()
        ))
    })?;
    let options = ScrapeOptions::new(params.limit, params.underperforming_only)?;

    state
        .scrape
        .run(category, &options)
        .await
        .map(Json)
        .map_err(|e| ApiError::with_context(e, "category", category.key))
}

pub async fn deep_scan(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
) -> Result<Json<DeepScanResponse>, ApiError> {
    state
        .deep_scan
        .run(&keyword)
        .await
        .map(Json)
        .map_err(|e| ApiError::with_context(e, "keyword", keyword.trim()))
}

/// Prometheus text exposition
pub async fn metrics_text() -> impl IntoResponse {
    match metrics::render() {
        Some(body) => (StatusCode::OK, body),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}
