//! Process configuration, loaded from the environment at startup.

use crate::domain::errors::ConfigError;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string for the document store. Scheme selects the
    /// adapter; absence is fatal at process start.
    pub store_uri: String,
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Load from `STORE_URI` (required) and `BIND_ADDR` (optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_uri = std::env::var("STORE_URI").map_err(|_| ConfigError::MissingStoreUri)?;
        if store_uri.is_empty() {
            return Err(ConfigError::MissingStoreUri);
        }

        let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind))?;

        Ok(Self {
            store_uri,
            bind_addr,
        })
    }
}
