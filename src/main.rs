//! Munchies Proxy - Main entry point
//!
//! Starts the caching proxy server that sits between the restaurant
//! directory frontend and the upstream restaurant API.

use anyhow::{Context, Result};
use munchies_proxy::client::{AsyncMunchiesClient, AsyncMunchiesClientImpl};
use munchies_proxy::server::{run_server, AppState};
use munchies_proxy::{Config, MunchiesClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level can come from it
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting Munchies proxy with upstream API URL: {}",
        config.api_base_url
    );
    info!(
        "Cache TTLs: restaurants {}s, filters {}s",
        config.restaurants_cache_ttl_secs, config.filters_cache_ttl_secs
    );

    // Initialize the upstream client; the proxy shares its metrics handle
    let sync_client = MunchiesClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client = Arc::new(AsyncMunchiesClientImpl::new(sync_client)) as Arc<dyn AsyncMunchiesClient>;

    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid BIND_ADDR: {}", config.bind_addr))?;

    let state = Arc::new(AppState::new(config, client, metrics));

    // Run the server (this will block until the server exits)
    run_server(state, addr).await?;

    info!("Munchies proxy shutdown complete");
    Ok(())
}
