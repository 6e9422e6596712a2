//! HTTP server for the Munchies proxy.
//!
//! Exposes the two read-through proxy endpoints consumed by the
//! restaurant directory frontend, plus health and metrics probes.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use handlers::{FILTERS_CACHE_KEY, RESTAURANTS_CACHE_KEY};
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the proxy router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Process counters
        .route("/metrics", get(handlers::get_metrics))
        // Read-through proxy endpoints
        .route("/api/restaurants", get(handlers::get_restaurants))
        .route("/api/filters", get(handlers::get_filters))
        // Operational cache maintenance
        .route("/api/cache/cleanup", post(handlers::cleanup_cache))
        .with_state(state)
}

/// Run the proxy server until it exits.
///
/// Binds the listener, wires CORS and request tracing, and serves the
/// router on the tokio runtime.
pub async fn run_server(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Munchies proxy listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
