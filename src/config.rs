//! Configuration management for the Munchies proxy.
//!
//! This module handles loading and validating configuration from environment variables.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the Munchies proxy server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream restaurant API base URL
    pub api_base_url: String,

    /// Address the HTTP server binds to (default: 0.0.0.0:3001)
    pub bind_addr: String,

    /// TTL for the restaurants endpoint cache, in seconds (default: 300)
    pub restaurants_cache_ttl_secs: u64,

    /// TTL for the filters endpoint cache, in seconds (default: 600)
    pub filters_cache_ttl_secs: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MUNCHIES_API_BASE_URL`: Base URL for the upstream restaurant API
    ///
    /// Optional environment variables:
    /// - `BIND_ADDR`: Listen address (default: 0.0.0.0:3001)
    /// - `RESTAURANTS_CACHE_TTL_SECS`: Restaurants cache TTL (default: 300)
    /// - `FILTERS_CACHE_TTL_SECS`: Filters cache TTL (default: 600)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("MUNCHIES_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("MUNCHIES_API_BASE_URL".to_string()))?;

        // Validate API URL format
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "MUNCHIES_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

        let restaurants_cache_ttl_secs = Self::parse_env_u64("RESTAURANTS_CACHE_TTL_SECS", 300)?;
        let filters_cache_ttl_secs = Self::parse_env_u64("FILTERS_CACHE_TTL_SECS", 600)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            api_base_url,
            bind_addr,
            restaurants_cache_ttl_secs,
            filters_cache_ttl_secs,
            request_timeout,
            log_level,
        })
    }

    /// TTL for the restaurants endpoint as a Duration.
    pub fn restaurants_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.restaurants_cache_ttl_secs)
    }

    /// TTL for the filters endpoint as a Duration.
    pub fn filters_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.filters_cache_ttl_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            bind_addr: "0.0.0.0:3001".to_string(),
            restaurants_cache_ttl_secs: 300,
            filters_cache_ttl_secs: 600,
            request_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
