//! Null Cache Module
//!
//! A cache which does not store any values.

use crate::cache::Cache;
use crate::error::Result;

// == Null Cache ==
/// Cache stand-in that always misses.
///
/// Lets call sites disable caching without branching on whether a cache
/// exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl<V> Cache<V> for NullCache {
    fn get(&self, _key: &str) -> Option<V> {
        None
    }

    fn set(&self, _key: String, _value: V) -> Result<bool> {
        Ok(false)
    }

    fn size(&self) -> usize {
        0
    }

    fn max_size(&self) -> usize {
        0
    }

    fn clear(&self) -> Result<()> {
        Ok(())
    }

    fn clear_prefix(&self, _prefix: &str) -> Result<usize> {
        Ok(0)
    }
}
