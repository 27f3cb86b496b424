use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// App record as returned by the store search service.
///
/// Every field is optional; the service passes through whatever the store
/// page exposed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawApp {
    pub app_id: Option<String>,
    pub title: Option<String>,
    pub score: Option<f64>,
    pub developer: Option<String>,
    pub price: Option<f64>,
    pub icon: Option<String>,
    pub installs: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

/// Search responses come either as a bare array or wrapped in `{"apps": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    Bare(Vec<RawApp>),
    Wrapped { apps: Vec<RawApp> },
}

impl SearchPayload {
    pub fn into_apps(self) -> Vec<RawApp> {
        match self {
            SearchPayload::Bare(apps) => apps,
            SearchPayload::Wrapped { apps } => apps,
        }
    }
}

const NOT_AVAILABLE: &str = "N/A";

/// Fixed per-app shape returned by `/scrape/{category}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSummary {
    pub title: String,
    pub app_id: String,
    pub score: Option<f64>,
    pub developer: String,
    pub price: Option<f64>,
    pub icon_url: Option<String>,
}

impl AppSummary {
    /// `None` when the record has no app id.
    pub fn from_raw(raw: &RawApp) -> Option<Self> {
        let app_id = raw.app_id.as_deref().filter(|id| !id.is_empty())?;
        Some(Self {
            title: raw.title.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            app_id: app_id.to_string(),
            score: raw.score,
            developer: raw
                .developer
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            price: raw.price,
            icon_url: raw.icon.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub category: String,
    pub canonical_id: String,
    pub is_game: bool,
    pub total_raw_collected: usize,
    pub total_unique_after_dedup: usize,
    pub count: usize,
    pub apps: Vec<AppSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepScanApp {
    pub title: String,
    pub app_id: String,
    pub score: f64,
    pub developer: String,
    pub description: Option<String>,
    pub installs: Option<String>,
    pub min_installs: Option<u64>,
}

impl DeepScanApp {
    pub fn from_raw(raw: &RawApp, score: f64) -> Self {
        Self {
            title: raw.title.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            app_id: raw.app_id.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            score,
            developer: raw
                .developer
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            description: raw.summary.clone().or_else(|| raw.description.clone()),
            installs: raw.installs.clone(),
            min_installs: raw.installs.as_deref().and_then(parse_count),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepScanResponse {
    pub keyword_searched: String,
    pub total_apps_scanned: usize,
    pub low_rated_apps_count: usize,
    pub apps: Vec<DeepScanApp>,
}

/// Public view of a directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub key: String,
    pub canonical_id: String,
    pub is_game: bool,
}

impl From<&Category> for CategoryInfo {
    fn from(category: &Category) -> Self {
        Self {
            key: category.key.to_string(),
            canonical_id: category.canonical_id.to_string(),
            is_game: category.is_game(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub count: usize,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub total_categories: usize,
    pub app_categories: CategoryGroup,
    pub game_categories: CategoryGroup,
    pub usage: String,
}

/// Parse Play Store count strings such as `"10,000+"`, `"1.5M"` or `"500K"`.
pub fn parse_count(value: &str) -> Option<u64> {
    let mut normalized = value.trim().to_lowercase().replace(',', "");
    if normalized.ends_with('+') {
        normalized.pop();
    }

    let mut multiplier = 1.0;
    if normalized.ends_with('m') {
        multiplier = 1_000_000.0;
        normalized.pop();
    } else if normalized.ends_with('k') {
        multiplier = 1_000.0;
        normalized.pop();
    }

    let number: f64 = normalized.trim().parse().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some((number * multiplier) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_store_counts() {
        assert_eq!(parse_count("10,000+"), Some(10_000));
        assert_eq!(parse_count("1.5M"), Some(1_500_000));
        assert_eq!(parse_count("500K+"), Some(500_000));
        assert_eq!(parse_count(" 42 "), Some(42));
        assert_eq!(parse_count("+"), None);
        assert_eq!(parse_count("lots"), None);
    }

    #[test]
    fn payload_accepts_both_shapes() {
        let bare: SearchPayload =
            serde_json::from_value(json!([{ "appId": "com.a", "score": 4.2 }])).unwrap();
        let wrapped: SearchPayload =
            serde_json::from_value(json!({ "apps": [{ "appId": "com.b" }] })).unwrap();

        assert_eq!(bare.into_apps()[0].app_id.as_deref(), Some("com.a"));
        assert_eq!(wrapped.into_apps()[0].app_id.as_deref(), Some("com.b"));
    }

    #[test]
    fn summary_requires_app_id() {
        assert!(AppSummary::from_raw(&RawApp::default()).is_none());

        let raw: RawApp = serde_json::from_value(json!({
            "appId": "com.example.todo",
            "title": "Todo",
            "score": 3.7,
            "price": 0.0,
            "icon": "https://play-lh.googleusercontent.com/todo"
        }))
        .unwrap();
        let summary = AppSummary::from_raw(&raw).unwrap();
        assert_eq!(summary.app_id, "com.example.todo");
        assert_eq!(summary.developer, "N/A");
        assert_eq!(
            summary.icon_url.as_deref(),
            Some("https://play-lh.googleusercontent.com/todo")
        );
    }

    #[test]
    fn summary_serializes_fixed_shape() {
        let summary = AppSummary {
            title: "Todo".into(),
            app_id: "com.example.todo".into(),
            score: Some(4.5),
            developer: "Example".into(),
            price: Some(0.0),
            icon_url: None,
        };
        let value = serde_json::to_value(&summary).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["app_id", "developer", "icon_url", "price", "score", "title"]);
    }

    #[test]
    fn deep_scan_prefers_summary() {
        let raw = RawApp {
            app_id: Some("com.vpn".into()),
            summary: Some("short".into()),
            description: Some("long".into()),
            installs: Some("1,000+".into()),
            ..Default::default()
        };
        let app = DeepScanApp::from_raw(&raw, 3.2);
        assert_eq!(app.description.as_deref(), Some("short"));
        assert_eq!(app.min_installs, Some(1_000));
    }

    #[test]
    fn deep_scan_missing_installs_serializes_null() {
        let raw = RawApp {
            app_id: Some("com.vpn".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(DeepScanApp::from_raw(&raw, 3.2)).unwrap();
        assert!(value["installs"].is_null());
        assert!(value["min_installs"].is_null());
    }
}
