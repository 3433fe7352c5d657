//! API Module
//!
//! HTTP handlers and routing for inspecting and driving the cache over REST.
//!
//! # Endpoints
//! - `PUT /set` - Store a value under a key and optional variant
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /prefix/:key` - Remove every variant of a key
//! - `POST /clear` - Remove every entry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
