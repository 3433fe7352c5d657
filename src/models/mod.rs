//! Request and Response models for the cache server API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{cache_key, SetRequest, VariantQuery};
pub use responses::{
    ClearPrefixResponse, ClearResponse, GetResponse, HealthResponse, SetResponse, StatsResponse,
};
