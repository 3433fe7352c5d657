//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested base key
    pub key: String,
    /// The requested variant, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, variant: Option<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            variant,
            value: value.into(),
        }
    }
}

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Status message
    pub message: String,
    /// The base key that was set
    pub key: String,
    /// False when the value was too large to cache or caching is disabled
    pub stored: bool,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, stored: bool) -> Self {
        let key = key.into();
        let message = if stored {
            format!("Key '{}' set successfully", key)
        } else {
            format!("Key '{}' was not cached", key)
        };
        Self {
            message,
            key,
            stored,
        }
    }
}

/// Response body for prefix invalidation (DELETE /prefix/:key)
#[derive(Debug, Clone, Serialize)]
pub struct ClearPrefixResponse {
    /// The base key whose variants were removed
    pub key: String,
    /// Number of entries removed
    pub removed: usize,
}

impl ClearPrefixResponse {
    pub fn new(key: impl Into<String>, removed: usize) -> Self {
        Self {
            key: key.into(),
            removed,
        }
    }
}

/// Response body for the clear endpoint (POST /clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl ClearResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of values stored
    pub puts: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub entries: usize,
    /// Current total size in bytes
    pub size: usize,
    /// Capacity in bytes
    pub max_size: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            puts: stats.puts,
            evictions: stats.evictions,
            entries: stats.entries,
            size: stats.size,
            max_size: stats.max_size,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
