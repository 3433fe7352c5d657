//! Cache Capability Contract
//!
//! Defines the operations every cache variant supports.

use crate::cache::CacheStats;
use crate::error::Result;

// == Cache Trait ==
/// A memory cache holding the most recently used values.
///
/// Implementations must be safe to share across threads; every method takes
/// `&self` and handles its own synchronization. A missing key is never an
/// error.
pub trait Cache<V>: Send + Sync {
    /// Retrieves the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<V>;

    /// Stores `value` under `key`.
    ///
    /// Returns `Ok(false)` when the value was not stored (too large to ever
    /// fit, or the cache stores nothing).
    fn set(&self, key: String, value: V) -> Result<bool>;

    /// Current total size of the stored values in bytes.
    fn size(&self) -> usize;

    /// Maximum size in bytes the cache can hold.
    fn max_size(&self) -> usize;

    /// Removes every entry.
    fn clear(&self) -> Result<()>;

    /// Removes every entry whose key is `prefix` followed by the key separator.
    ///
    /// Returns the number of entries removed.
    fn clear_prefix(&self, prefix: &str) -> Result<usize>;

    /// Snapshot of usage statistics.
    fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.size(),
            max_size: self.max_size(),
            ..CacheStats::default()
        }
    }
}
