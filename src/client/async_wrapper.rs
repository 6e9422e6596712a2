//! Async wrapper around the synchronous MunchiesClient.
//!
//! This module provides an async interface to the synchronous client by
//! using `tokio::task::spawn_blocking` to run HTTP operations on a
//! dedicated thread pool, preventing blocking of the async runtime.

use crate::client::MunchiesClient;
use crate::error::{UpstreamApiError, UpstreamResult};
use crate::models::{FiltersResponse, RestaurantsResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the upstream restaurant API.
///
/// The proxy handlers depend on this trait rather than the concrete
/// client so tests can substitute a stub upstream.
#[async_trait]
pub trait AsyncMunchiesClient: Send + Sync {
    async fn get_restaurants(&self) -> UpstreamResult<RestaurantsResponse>;
    async fn get_filters(&self) -> UpstreamResult<FiltersResponse>;
}

/// Async wrapper around the synchronous MunchiesClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP operations
/// on a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncMunchiesClientImpl {
    client: Arc<MunchiesClient>,
}

impl AsyncMunchiesClientImpl {
    pub fn new(client: MunchiesClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncMunchiesClient for AsyncMunchiesClientImpl {
    async fn get_restaurants(&self) -> UpstreamResult<RestaurantsResponse> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_restaurants())
            .await
            .map_err(|e| UpstreamApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_filters(&self) -> UpstreamResult<FiltersResponse> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_filters())
            .await
            .map_err(|e| UpstreamApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
