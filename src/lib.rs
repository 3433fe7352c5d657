//! Sized Cache - A byte-size bounded in-memory LRU cache
//!
//! Stores values under string keys, evicts the least recently used entries
//! once their combined size exceeds a byte budget, and invalidates every
//! variant of a key at once. An HTTP front exposes the cache for local use.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{ByteLenSizer, Cache, CacheStats, LruCache, NullCache, Sizer};
pub use config::Config;
pub use error::{CacheError, Result};
