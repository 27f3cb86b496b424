pub mod api_error;
pub mod handlers;

use axum::{http::Method, routing::get, Router};
use hyper::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::{DeepScanUseCase, ScrapeUseCase, StoreSearchPort};
use crate::config::{ServerConfig, StoreConfig};

pub use api_error::ApiError;

/// Shared handler state: the use cases, wired to one store port.
#[derive(Clone)]
pub struct AppState {
    pub scrape: Arc<ScrapeUseCase>,
    pub deep_scan: Arc<DeepScanUseCase>,
}

impl AppState {
    pub fn new(store: Arc<dyn StoreSearchPort>, settings: StoreConfig) -> Self {
        Self {
            scrape: Arc::new(ScrapeUseCase::new(store.clone(), settings.clone())),
            deep_scan: Arc::new(DeepScanUseCase::new(store, settings)),
        }
    }
}

/// Create the HTTP router with all routes
pub fn create_server(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics_text))
        .route("/categories", get(handlers::list_categories))
        .route("/categories/:category_name", get(handlers::lookup_category))
        .route("/scrape/:category_name", get(handlers::scrape_category))
        .route("/deep-scan/:keyword", get(handlers::deep_scan))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Serve the API until ctrl-c
pub async fn start_server(state: AppState, settings: &ServerConfig) -> anyhow::Result<()> {
    let app = create_server(state);
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;

    info!("HTTP server running on http://{}", addr);
    info!("Health check: http://{}/health", addr);
    info!("Categories:   http://{}/categories", addr);

    Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
    }
}
