//! Cache Key Module
//!
//! Composite keys of the form `base SEPARATOR variant`, used to cache several
//! variants of one logical resource and invalidate them together.

/// Separates the base identifier from the variant descriptor in a key.
pub const KEY_SEPARATOR: char = '\n';

/// Builds a composite key from a base identifier and a variant descriptor.
pub fn compose(base: &str, variant: &str) -> String {
    let mut key = String::with_capacity(base.len() + variant.len() + 1);
    key.push_str(base);
    key.push(KEY_SEPARATOR);
    key.push_str(variant);
    key
}

/// Returns true if `key` is `prefix` followed by the separator.
///
/// The first separator in `key` must sit exactly at `prefix.len()`, so
/// `"abc"` matches `"abc\nX"` but not `"abcd\nX"`.
pub fn matches_prefix(key: &str, prefix: &str) -> bool {
    match key.find(KEY_SEPARATOR) {
        Some(idx) => idx == prefix.len() && &key[..idx] == prefix,
        None => false,
    }
}
