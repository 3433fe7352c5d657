//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::cache::key::{compose, KEY_SEPARATOR};

/// Maximum allowed length of a base key or variant, in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for the SET operation (PUT /set)
///
/// # Fields
/// - `key`: Base identifier of the resource
/// - `variant`: Optional variant descriptor (e.g. a rendered size)
/// - `value`: The value to store
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// Base identifier
    pub key: String,
    /// Optional variant descriptor
    #[serde(default)]
    pub variant: Option<String>,
    /// The value to store
    pub value: String,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_part("Key", &self.key, false)
            .or_else(|| {
                self.variant
                    .as_deref()
                    .and_then(|v| validate_part("Variant", v, true))
            })
    }

    /// The composite key this request is stored under
    pub fn cache_key(&self) -> String {
        cache_key(&self.key, self.variant.as_deref())
    }
}

/// Query string accepted by GET /get/:key
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantQuery {
    #[serde(default)]
    pub variant: Option<String>,
}

/// Builds the key a base identifier and optional variant are stored under.
pub fn cache_key(key: &str, variant: Option<&str>) -> String {
    match variant {
        Some(variant) => compose(key, variant),
        None => key.to_string(),
    }
}

/// Checks one key component, returning a message on failure.
pub fn validate_part(name: &str, value: &str, allow_empty: bool) -> Option<String> {
    if value.is_empty() && !allow_empty {
        return Some(format!("{} cannot be empty", name));
    }
    if value.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "{} exceeds maximum length of {} characters",
            name, MAX_KEY_LENGTH
        ));
    }
    if value.contains(KEY_SEPARATOR) {
        return Some(format!("{} cannot contain a newline", name));
    }
    None
}
