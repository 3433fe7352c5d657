//! Configuration Module
//!
//! Handles loading the cache budget and server settings from environment
//! variables.

use std::env;

/// Default cache budget: 64 MiB.
pub const DEFAULT_MAX_SIZE_BYTES: usize = 64 * 1024 * 1024;

/// Server and cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum total size in bytes the cache can hold
    pub max_size_bytes: usize,
    /// When false the server runs with a cache that stores nothing
    pub cache_enabled: bool,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_BYTES` - Cache budget in bytes (default: 64 MiB)
    /// - `CACHE_ENABLED` - `false` or `0` disables caching (default: true)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_size_bytes: env::var("CACHE_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_size_bytes),
            cache_enabled: env::var("CACHE_ENABLED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_enabled),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            cache_enabled: true,
            server_port: 3000,
        }
    }
}
