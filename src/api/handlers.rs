//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::{ByteLenSizer, Cache, LruCache, NullCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::requests::validate_part;
use crate::models::{
    cache_key, ClearPrefixResponse, ClearResponse, GetResponse, HealthResponse, SetRequest,
    SetResponse, StatsResponse, VariantQuery,
};

/// Cache shared by every handler. Values are strings sized by their byte length.
pub type SharedCache = Arc<dyn Cache<String>>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: impl Cache<String> + 'static) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds a byte-bounded LRU cache, or a cache that stores nothing when
    /// caching is disabled.
    pub fn from_config(config: &Config) -> Result<Self> {
        if !config.cache_enabled {
            info!("Caching disabled, using null cache");
            return Ok(Self::new(NullCache));
        }

        let cache = LruCache::new(config.max_size_bytes, ByteLenSizer)?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /set
///
/// Stores a value under its base key and optional variant.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let stored = state.cache.set(req.cache_key(), req.value)?;

    Ok(Json(SetResponse::new(req.key, stored)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value by base key and optional `variant` query parameter.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<VariantQuery>,
) -> Result<Json<GetResponse>> {
    let full_key = cache_key(&key, query.variant.as_deref());

    match state.cache.get(&full_key) {
        Some(value) => Ok(Json(GetResponse::new(key, query.variant, value))),
        None => Err(CacheError::NotFound(full_key.replace('\n', "/"))),
    }
}

/// Handler for DELETE /prefix/:key
///
/// Removes every variant cached under the base key.
pub async fn clear_prefix_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ClearPrefixResponse>> {
    if let Some(error_msg) = validate_part("Key", &key, false) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let removed = state.cache.clear_prefix(&key)?;

    Ok(Json(ClearPrefixResponse::new(key, removed)))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    state.cache.clear()?;
    Ok(Json(ClearResponse::cleared()))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
