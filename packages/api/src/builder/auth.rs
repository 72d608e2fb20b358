//! Authentication headers
//!
//! Credentials become default headers of the connection. They are dropped
//! automatically when a redirect leaves the original host.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::builder::core::ConnectionBuilder;
use crate::builder::headers::header;

impl<C> ConnectionBuilder<C> {
    /// Set API key authentication header
    ///
    /// Adds an `X-API-Key` header with the provided API key value.
    #[must_use]
    pub fn api_key(self, key: &str) -> Self {
        self.header(header::X_API_KEY, key)
    }

    /// Set basic authentication header
    ///
    /// The credentials are base64 encoded as `user:password`.
    ///
    /// # Examples
    /// ```no_run
    /// use simple_http::SimpleHttp;
    ///
    /// let conn = SimpleHttp::connect("https://api.example.com")
    ///     .basic_auth("user", "password")
    ///     .build();
    /// ```
    #[must_use]
    pub fn basic_auth(self, user: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{user}:{password}"));
        self.header(header::AUTHORIZATION, format!("Basic {encoded}"))
    }

    /// Set bearer token authentication header
    #[must_use]
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header(header::AUTHORIZATION, format!("Bearer {token}"))
    }
}
