//! Connection builder API modules
//!
//! Fluent configuration of a [`Connection`](simple_http_client::Connection)
//! plus verb shorthands for sending requests through it.

pub mod auth;
pub mod core;
pub mod headers;
pub mod methods;

// Re-export all public types for convenience
pub use self::core::*;
pub use headers::*;
pub use methods::*;
