//! The connection: one base URL, a resolved option set and a transport
//! connector, with request dispatch and redirect following on top.
//!
//! Split into construction and accessors (`core`), SSL and transport
//! configuration (`configuration`) and request execution (`execute`).

pub mod configuration;
pub mod core;
pub mod execute;

pub use self::core::Connection;
