//! HTTP client for the upstream restaurant directory API.
//!
//! This module provides a synchronous HTTP client that is used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles URL
//! construction, JSON parsing, and error mapping for the upstream API.

mod async_wrapper;
pub use async_wrapper::{AsyncMunchiesClient, AsyncMunchiesClientImpl};

use crate::config::Config;
use crate::error::{UpstreamApiError, UpstreamResult};
use crate::metrics::Metrics;
use crate::models::{FiltersResponse, RestaurantsResponse};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the upstream Munchies restaurant API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct MunchiesClient {
    /// Base URL for the upstream API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl MunchiesClient {
    /// Create a new MunchiesClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a MunchiesClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request against the upstream API.
    fn get(&self, path: &str) -> Result<ureq::Response, UpstreamApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_error);

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_upstream_error();
        }
        self.metrics.record_upstream_request(duration);

        result
    }

    /// Fetch the full restaurant list from `GET /restaurants`.
    pub fn get_restaurants(&self) -> UpstreamResult<RestaurantsResponse> {
        let response = self.get("/restaurants")?;
        let body = response
            .into_string()
            .map_err(|e| UpstreamApiError::HttpError(e.to_string()))?;

        let restaurants: RestaurantsResponse =
            serde_json::from_str(&body).map_err(UpstreamApiError::JsonError)?;

        self.metrics
            .record_restaurants_fetched(restaurants.restaurants.len());
        Ok(restaurants)
    }

    /// Fetch the category filter list from `GET /filter`.
    ///
    /// The upstream path is singular.
    pub fn get_filters(&self) -> UpstreamResult<FiltersResponse> {
        let response = self.get("/filter")?;
        let body = response
            .into_string()
            .map_err(|e| UpstreamApiError::HttpError(e.to_string()))?;

        let filters: FiltersResponse =
            serde_json::from_str(&body).map_err(UpstreamApiError::JsonError)?;

        self.metrics.record_filters_fetched(filters.filters.len());
        Ok(filters)
    }
}

/// Map a ureq error to an UpstreamApiError.
fn map_error(error: ureq::Error) -> UpstreamApiError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());

            match code {
                404 => UpstreamApiError::NotFound(message),
                _ => UpstreamApiError::ApiError {
                    status: code,
                    message,
                },
            }
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                UpstreamApiError::HttpError("Connection failed".to_string())
            } else if transport.kind() == ureq::ErrorKind::Io {
                UpstreamApiError::Timeout
            } else {
                UpstreamApiError::HttpError(transport.to_string())
            }
        }
    }
}
