//! Cache Module
//!
//! Provides a byte-size bounded in-memory cache with LRU eviction and
//! prefix-based invalidation.

mod entry;
pub mod key;
mod null;
mod sizer;
mod stats;
mod store;
mod traits;


// Re-export public types
pub use key::KEY_SEPARATOR;
pub use null::NullCache;
pub use sizer::{ByteLenSizer, Sizer};
pub use stats::CacheStats;
pub use store::LruCache;
pub use traits::Cache;
