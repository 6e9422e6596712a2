//! Munchies Proxy - a caching proxy server for the Munchies restaurant directory.
//!
//! This library sits between the restaurant directory frontend and the
//! upstream restaurant REST API, adding a short-lived in-memory cache so
//! repeated page loads don't hammer the upstream.
//!
//! # Architecture
//!
//! - **cache**: process-wide in-memory TTL cache with lazy expiry
//! - **models**: restaurant and filter data structures
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **client**: HTTP client for the upstream restaurant API
//! - **metrics**: process counters for upstream traffic and cache hits
//! - **server**: axum HTTP server exposing the proxy endpoints

// Re-export commonly used types
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;

pub use cache::MemoryCache;
pub use client::{AsyncMunchiesClient, AsyncMunchiesClientImpl, MunchiesClient};
pub use config::Config;
pub use error::{ConfigError, UpstreamApiError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{CachedPayload, Filter, FiltersResponse, Restaurant, RestaurantsResponse};
pub use server::{create_router, AppState, FILTERS_CACHE_KEY, RESTAURANTS_CACHE_KEY};
