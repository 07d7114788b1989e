//! Binary entry point for the CRM registry server.
//!
//! Startup sequence:
//!
//! 1. Initialize logging (RUST_LOG overrides the default filter)
//! 2. Load configuration from the environment (STORE_URI is mandatory)
//! 3. Open the document store named by the URI scheme
//! 4. Bind and serve; Ctrl+C drains in-flight requests and exits

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crm_registry::{build_router, open_store, AppConfig, RecordService};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crm_registry=info,tower_http=info")),
        )
        .with_target(true)
        .init();

    let config = AppConfig::from_env().context("configuration error")?;

    let store = open_store(&config.store_uri)?;
    let service = Arc::new(RecordService::new(store));
    let app = build_router(service);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "registry listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install Ctrl+C handler; shutting down");
    }
}
