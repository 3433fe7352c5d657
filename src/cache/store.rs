//! Cache Store Module
//!
//! Main cache engine: an access-ordered hash map with byte size accounting.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hashlink::LinkedHashMap;
use tracing::{debug, error};

use crate::cache::entry::SizedEntry;
use crate::cache::key::matches_prefix;
use crate::cache::{Cache, CacheStats, Sizer};
use crate::error::{CacheError, Result};

// == Trim Target ==
#[derive(Debug, Clone, Copy)]
enum Trim {
    /// Evict until the total size is at most this many bytes
    To(usize),
    /// Evict every entry, including zero-sized ones
    All,
}

// == Cache State ==
/// State guarded by the cache mutex.
///
/// `entries` is kept in access order: front = least recently used,
/// back = most recently used.
#[derive(Debug)]
struct Inner<V> {
    entries: LinkedHashMap<String, SizedEntry<V>>,
    total_size: usize,
    stats: CacheStats,
}

// == LRU Cache ==
/// A memory cache bounded by total byte size, evicting least recently used
/// entries first.
///
/// Every operation holds one mutex for its full duration, so the cache can be
/// shared across threads behind an `Arc`. The sizer must be pure and must not
/// call back into the cache.
#[derive(Debug)]
pub struct LruCache<V, S> {
    inner: Mutex<Inner<V>>,
    sizer: S,
    max_size: usize,
}

impl<V, S> LruCache<V, S>
where
    S: Sizer<V>,
{
    // == Constructor ==
    /// Creates a cache holding at most `max_size` bytes as measured by `sizer`.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidCapacity` if `max_size` is zero.
    pub fn new(max_size: usize, sizer: S) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidCapacity);
        }

        Ok(Self {
            inner: Mutex::new(Inner {
                entries: LinkedHashMap::new(),
                total_size: 0,
                stats: CacheStats::new(max_size),
            }),
            sizer,
            max_size,
        })
    }

    // A panicking sizer poisons the lock; the invariant checks catch any
    // damage it left behind.
    fn lock(&self) -> MutexGuard<'_, Inner<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn inconsistent(&self, detail: String) -> CacheError {
        error!(detail = %detail, "Sizer is reporting inconsistent results");
        CacheError::InconsistentSize(detail)
    }

    // == Release ==
    /// Takes a removed entry's bytes off the running total.
    ///
    /// The sizer is asked again for the entry's size; any difference from the
    /// size recorded at insertion is an accounting error.
    fn release(&self, inner: &mut Inner<V>, key: &str, entry: &SizedEntry<V>) -> Result<()> {
        let current = self.sizer.size_of(&entry.value);

        inner.total_size = inner.total_size.checked_sub(entry.size).ok_or_else(|| {
            self.inconsistent(format!(
                "removing {:?} ({} bytes) would make the total size negative",
                key, entry.size
            ))
        })?;

        if entry.has_drifted(current) {
            return Err(self.inconsistent(format!(
                "{:?} was {} bytes when stored but is now {} bytes",
                key, entry.size, current
            )));
        }

        Ok(())
    }

    // == Trim ==
    /// Evicts least recently used entries until the total fits `target`.
    fn trim(&self, inner: &mut Inner<V>, target: Trim) -> Result<()> {
        loop {
            if inner.entries.is_empty() && inner.total_size != 0 {
                return Err(self.inconsistent(format!(
                    "cache is empty but still accounts for {} bytes",
                    inner.total_size
                )));
            }

            let over = match target {
                Trim::To(max) => inner.total_size > max,
                Trim::All => true,
            };
            if !over {
                break;
            }

            let Some((key, entry)) = inner.entries.pop_front() else {
                break;
            };

            self.release(inner, &key, &entry)?;
            inner.stats.record_eviction();
            debug!(key = ?key, size = entry.size, "Evicted cache entry");
        }

        Ok(())
    }

    // == Counters ==
    /// Number of times `get` returned a value.
    pub fn hit_count(&self) -> u64 {
        self.lock().stats.hits
    }

    /// Number of times `get` returned nothing.
    pub fn miss_count(&self) -> u64 {
        self.lock().stats.misses
    }

    /// Number of values accepted by `set`.
    pub fn put_count(&self) -> u64 {
        self.lock().stats.puts
    }

    /// Number of entries evicted, including those removed by `clear`.
    pub fn eviction_count(&self) -> u64 {
        self.lock().stats.evictions
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Checks for a key without touching recency or the hit/miss counters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }
}

impl<V, S> Cache<V> for LruCache<V, S>
where
    V: Clone + Send,
    S: Sizer<V>,
{
    // == Get ==
    fn get(&self, key: &str) -> Option<V> {
        let mut guard = self.lock();
        let inner = &mut *guard;

        match inner.entries.to_back(key) {
            Some(entry) => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                Some(value)
            }
            None => {
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value, evicting older entries until the cache fits again.
    ///
    /// A value larger than the whole cache is not stored and leaves any
    /// existing entry under `key` in place.
    fn set(&self, key: String, value: V) -> Result<bool> {
        let added = self.sizer.size_of(&value);
        if added > self.max_size {
            debug!(key = ?key, size = added, max_size = self.max_size, "Value too large to cache");
            return Ok(false);
        }

        let mut guard = self.lock();
        let inner = &mut *guard;

        inner.stats.record_put();

        if let Some(previous) = inner.entries.remove(&key) {
            self.release(inner, &key, &previous)?;
        }

        // Same evictions as insert-then-trim; the total never exceeds max_size.
        self.trim(inner, Trim::To(self.max_size - added))?;

        inner.total_size += added;
        inner.entries.insert(key, SizedEntry::new(value, added));
        Ok(true)
    }

    fn size(&self) -> usize {
        self.lock().total_size
    }

    fn max_size(&self) -> usize {
        self.max_size
    }

    // == Clear ==
    fn clear(&self) -> Result<()> {
        let mut guard = self.lock();
        self.trim(&mut guard, Trim::All)
    }

    // == Clear Prefix ==
    /// Removes every variant cached under the base identifier `prefix`.
    ///
    /// Eviction and hit/miss counters are left untouched.
    fn clear_prefix(&self, prefix: &str) -> Result<usize> {
        let mut guard = self.lock();
        let inner = &mut *guard;

        let matched: Vec<String> = inner
            .entries
            .keys()
            .filter(|key| matches_prefix(key, prefix))
            .cloned()
            .collect();
        if matched.is_empty() {
            return Ok(0);
        }

        // Remove every match before reporting the first accounting failure.
        let mut outcome = Ok(());
        for key in &matched {
            if let Some(entry) = inner.entries.remove(key) {
                let released = self.release(inner, key, &entry);
                if outcome.is_ok() {
                    outcome = released;
                }
            }
        }

        debug!(prefix = ?prefix, removed = matched.len(), "Cleared cache entries by prefix");
        outcome.map(|()| matched.len())
    }

    // == Stats ==
    fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            entries: inner.entries.len(),
            size: inner.total_size,
            ..inner.stats.clone()
        }
    }
}
