//! SimpleHttp Public API
//!
//! Fluent construction of [`Connection`]s and verb shorthands on top of
//! `send_request`. Redirects are followed transparently up to the
//! connection's `max_redirects`.
//!
//! ```no_run
//! use simple_http::{ConnectionExt, SimpleHttp};
//!
//! fn main() -> simple_http::Result<()> {
//!     let conn = SimpleHttp::connect("https://api.example.com")
//!         .bearer_auth("token")
//!         .max_redirects(5)
//!         .build()?;
//!
//!     let response = conn.post("/users", [("first_name", "jane")])?;
//!     println!("{}", response.status());
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::*;

// Re-export important types from client package
pub use simple_http_client::{
    Connection, ConnectionOptions, Connector, Error, Headers, HyperConnector, Kind, Method, Params, RequestOptions,
    Response, Result, Scheme, SslOptions, SslVerifyMode, Transport,
};

/// Main SimpleHttp entry point
pub struct SimpleHttp;

impl SimpleHttp {
    /// Start building a connection to `url`
    ///
    /// Shorthand for `ConnectionBuilder::new(url)`
    #[must_use]
    pub fn connect(url: impl Into<String>) -> ConnectionBuilder {
        ConnectionBuilder::new(url)
    }

    /// Connection to `url` with every option at its default
    ///
    /// # Errors
    ///
    /// See [`ConnectionBuilder::build`].
    pub fn new(url: &str) -> Result<Connection> {
        Connection::new(url, ConnectionOptions::new())
    }
}
