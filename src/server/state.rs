//! Shared application state: config, cache, upstream client, metrics.

use crate::cache::MemoryCache;
use crate::client::AsyncMunchiesClient;
use crate::config::Config;
use crate::metrics::Metrics;
use crate::models::CachedPayload;
use std::sync::Arc;
use std::time::Duration;

/// TTL applied when a lookup does not pass its own.
///
/// The proxy handlers always pass an explicit per-endpoint TTL; this only
/// backs `cleanup` calls and direct `get` use.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// State shared by every request handler.
///
/// The cache is constructed once here and reached only through this
/// state, so the whole process shares a single instance.
pub struct AppState {
    pub config: Config,
    pub cache: MemoryCache<CachedPayload>,
    pub client: Arc<dyn AsyncMunchiesClient>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn AsyncMunchiesClient>, metrics: Metrics) -> Self {
        Self {
            config,
            cache: MemoryCache::new(DEFAULT_CACHE_TTL),
            client,
            metrics,
        }
    }
}
