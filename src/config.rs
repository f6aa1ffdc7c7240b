//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.
//! Both stores live purely in memory, so there is nothing to configure about storage.

use std::env;

/// Default tracing filter when neither `RUST_LOG` nor `LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "twin_cache=info,tower_http=info";

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Fallback tracing filter directive
    pub log_filter: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `LOG_FILTER` - tracing filter used when `RUST_LOG` is unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            log_filter: env::var("LOG_FILTER")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
