use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::error::ScraperError;

/// HTTP-facing error: a status code plus a JSON body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiError {
    /// Map `err`, tagging server-side failures with `(field, value)` so the
    /// client can tell which category or keyword failed.
    pub fn with_context(err: ScraperError, field: &str, value: &str) -> Self {
        let mut api_error = Self::from(err);
        if api_error.status.is_server_error() {
            if let Some(body) = api_error.body.as_object_mut() {
                body.insert(field.to_string(), Value::String(value.to_string()));
            }
        }
        api_error
    }
}

impl From<ScraperError> for ApiError {
    fn from(err: ScraperError) -> Self {
        match err {
            ScraperError::CategoryNotFound(miss) => ApiError {
                status: StatusCode::NOT_FOUND,
                body: json!({
                    "error": format!("Category '{}' not found", miss.input),
                    "normalized": miss.normalized,
                    "suggested_categories": miss.suggestions,
                    "available_categories_count": miss.available,
                    "hint": "GET /categories lists every available category",
                }),
            },
            ScraperError::InvalidInput(message) => ApiError {
                status: StatusCode::BAD_REQUEST,
                body: json!({ "error": message }),
            },
            ScraperError::InvalidQuery(message) => ApiError {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                body: json!({ "error": message }),
            },
            ScraperError::NoResults(keyword) => ApiError {
                status: StatusCode::NOT_FOUND,
                body: json!({
                    "error": format!("No results found for keyword '{keyword}'"),
                    "suggestion": "Try a different keyword or check spelling",
                }),
            },
            other => {
                error!("request failed: {}", other);
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: json!({
                        "error": "Failed to query the Play Store",
                        "details": other.to_string(),
                    }),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
