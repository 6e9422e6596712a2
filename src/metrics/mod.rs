//! Basic metrics instrumentation for the proxy.
//!
//! Provides counters for upstream HTTP traffic and cache effectiveness,
//! served as a JSON snapshot by the `/metrics` endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for tracking proxy performance.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of upstream HTTP requests made
    upstream_requests_total: Arc<AtomicU64>,

    /// Total number of upstream HTTP errors
    upstream_errors_total: Arc<AtomicU64>,

    /// Total duration of all upstream requests in milliseconds
    upstream_duration_total_ms: Arc<AtomicU64>,

    /// Number of requests served from the cache
    cache_hits_total: Arc<AtomicU64>,

    /// Number of requests that missed the cache
    cache_misses_total: Arc<AtomicU64>,

    /// Number of restaurants fetched from upstream
    restaurants_fetched_total: Arc<AtomicU64>,

    /// Number of filters fetched from upstream
    filters_fetched_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            upstream_requests_total: Arc::new(AtomicU64::new(0)),
            upstream_errors_total: Arc::new(AtomicU64::new(0)),
            upstream_duration_total_ms: Arc::new(AtomicU64::new(0)),
            cache_hits_total: Arc::new(AtomicU64::new(0)),
            cache_misses_total: Arc::new(AtomicU64::new(0)),
            restaurants_fetched_total: Arc::new(AtomicU64::new(0)),
            filters_fetched_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an upstream HTTP request with duration.
    pub fn record_upstream_request(&self, duration: Duration) {
        self.upstream_requests_total.fetch_add(1, Ordering::Relaxed);
        self.upstream_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an upstream HTTP error.
    pub fn record_upstream_error(&self) {
        self.upstream_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache hit.
    pub fn record_cache_hit(&self) {
        self.cache_hits_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss.
    pub fn record_cache_miss(&self) {
        self.cache_misses_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record restaurants fetched from upstream.
    pub fn record_restaurants_fetched(&self, count: usize) {
        self.restaurants_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record filters fetched from upstream.
    pub fn record_filters_fetched(&self, count: usize) {
        self.filters_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Get total upstream requests.
    pub fn upstream_requests_total(&self) -> u64 {
        self.upstream_requests_total.load(Ordering::Relaxed)
    }

    /// Get total upstream errors.
    pub fn upstream_errors_total(&self) -> u64 {
        self.upstream_errors_total.load(Ordering::Relaxed)
    }

    /// Get total cache hits.
    pub fn cache_hits_total(&self) -> u64 {
        self.cache_hits_total.load(Ordering::Relaxed)
    }

    /// Get total cache misses.
    pub fn cache_misses_total(&self) -> u64 {
        self.cache_misses_total.load(Ordering::Relaxed)
    }

    /// Get average upstream request duration in milliseconds.
    pub fn upstream_duration_avg_ms(&self) -> f64 {
        let total = self.upstream_duration_total_ms.load(Ordering::Relaxed);
        let count = self.upstream_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.upstream_requests_total.store(0, Ordering::Relaxed);
        self.upstream_errors_total.store(0, Ordering::Relaxed);
        self.upstream_duration_total_ms.store(0, Ordering::Relaxed);
        self.cache_hits_total.store(0, Ordering::Relaxed);
        self.cache_misses_total.store(0, Ordering::Relaxed);
        self.restaurants_fetched_total.store(0, Ordering::Relaxed);
        self.filters_fetched_total.store(0, Ordering::Relaxed);
    }

    /// Get a snapshot of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            upstream_requests_total: self.upstream_requests_total(),
            upstream_errors_total: self.upstream_errors_total(),
            upstream_duration_avg_ms: self.upstream_duration_avg_ms(),
            cache_hits_total: self.cache_hits_total(),
            cache_misses_total: self.cache_misses_total(),
            restaurants_fetched_total: self.restaurants_fetched_total.load(Ordering::Relaxed),
            filters_fetched_total: self.filters_fetched_total.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub upstream_requests_total: u64,
    pub upstream_errors_total: u64,
    pub upstream_duration_avg_ms: f64,
    pub cache_hits_total: u64,
    pub cache_misses_total: u64,
    pub restaurants_fetched_total: u64,
    pub filters_fetched_total: u64,
}
