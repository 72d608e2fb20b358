//! # SimpleHttp Client
//!
//! Blocking HTTP(S) connection with option merging, SSL trust configuration
//! and redirect following.
//!
//! ## Features
//!
//! - **One connection per base URL** with scheme, host and port resolved up front
//! - **Option merge** of `headers`, `ssl` and `max_redirects` over fixed defaults
//! - **Rustls TLS** with native root certificates and a webpki fallback
//! - **Redirect following** for 301/302/303/307/308 with the 303 GET downgrade
//! - **Compression support** (gzip, deflate)
//! - **Pluggable transport** behind the [`Connector`] and [`Transport`] traits
//!
//! ## Usage
//!
//! ```no_run
//! use simple_http_client::{Connection, ConnectionOptions, Params};
//!
//! fn main() -> simple_http_client::Result<()> {
//!     let conn = Connection::new("https://example.com", ConnectionOptions::new())?;
//!
//!     let response = conn.send_request("post", "/users", Params::from([("first_name", "jane")]))?;
//!     println!("{} after {} redirects", response.status(), response.redirect_chain().len());
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod redirect;
pub mod tls;
pub mod transport;

pub mod prelude;

pub use crate::prelude::*;

/// Version of this crate, also sent in the default `User-Agent`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
