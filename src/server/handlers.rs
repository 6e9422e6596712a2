//! Proxy route handlers.
//!
//! Each endpoint reads through the shared cache under a fixed key and
//! TTL: on a hit the cached payload is returned with `x-cache: HIT`; on a
//! miss a single upstream request is made (no retry), the parsed body is
//! stored, and the response carries `x-cache: MISS`. Upstream failures
//! surface as a generic 500 and never populate the cache.

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error, info};

use crate::models::CachedPayload;
use crate::server::error::ApiError;
use crate::server::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// Cache key for the restaurants endpoint.
pub const RESTAURANTS_CACHE_KEY: &str = "restaurants";

/// Cache key for the filters endpoint.
pub const FILTERS_CACHE_KEY: &str = "filters";

/// Whether a response was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    fn header_value(self) -> HeaderValue {
        match self {
            CacheStatus::Hit => HeaderValue::from_static("HIT"),
            CacheStatus::Miss => HeaderValue::from_static("MISS"),
        }
    }
}

/// Build a JSON response carrying the cache status header.
fn payload_response(status: CacheStatus, payload: CachedPayload) -> Response {
    let mut response = Json(payload).into_response();
    response
        .headers_mut()
        .insert("x-cache", status.header_value());
    response
}

/// GET /api/restaurants
pub async fn get_restaurants(State(state): State<Arc<AppState>>) -> Result<Response> {
    let ttl = state.config.restaurants_cache_ttl();

    if let Some(cached) = state.cache.get_with_ttl(RESTAURANTS_CACHE_KEY, ttl) {
        state.metrics.record_cache_hit();
        debug!("Returning cached restaurants data");
        return Ok(payload_response(CacheStatus::Hit, cached));
    }

    state.metrics.record_cache_miss();
    info!("Fetching fresh restaurants data from upstream");

    let fresh = state.client.get_restaurants().await.map_err(|e| {
        error!("Error fetching restaurants: {}", e);
        ApiError::upstream("Failed to fetch restaurants")
    })?;

    let payload = CachedPayload::Restaurants(fresh);
    state.cache.insert(RESTAURANTS_CACHE_KEY, payload.clone());

    Ok(payload_response(CacheStatus::Miss, payload))
}

/// GET /api/filters
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Result<Response> {
    let ttl = state.config.filters_cache_ttl();

    if let Some(cached) = state.cache.get_with_ttl(FILTERS_CACHE_KEY, ttl) {
        state.metrics.record_cache_hit();
        debug!("Returning cached filters data");
        return Ok(payload_response(CacheStatus::Hit, cached));
    }

    state.metrics.record_cache_miss();
    info!("Fetching fresh filters data from upstream");

    let fresh = state.client.get_filters().await.map_err(|e| {
        error!("Error fetching filters: {}", e);
        ApiError::upstream("Failed to fetch filters")
    })?;

    let payload = CachedPayload::Filters(fresh);
    state.cache.insert(FILTERS_CACHE_KEY, payload.clone());

    Ok(payload_response(CacheStatus::Miss, payload))
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /metrics
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.metrics.summary())
}

/// POST /api/cache/cleanup
///
/// Proactively evicts expired entries. Correctness of the read path does
/// not depend on this being called; it only reclaims memory earlier.
pub async fn cleanup_cache(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let removed = state.cache.cleanup();
    let size = state.cache.len();

    info!(removed, size, "Cache cleanup complete");

    Json(json!({ "removed": removed, "size": size }))
}
