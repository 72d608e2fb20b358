//! Header management for the connection's default headers

use crate::builder::core::ConnectionBuilder;

/// Header constants for common HTTP headers
pub mod header {
    pub use http::header::*;

    /// Custom X-API-Key header for API authentication
    pub const X_API_KEY: &str = "x-api-key";
}

impl<C> ConnectionBuilder<C> {
    /// Add a header sent with every request
    ///
    /// Names are matched case-insensitively; setting the same name twice keeps
    /// the last value. Invalid names or values surface as a builder error from
    /// [`build`](ConnectionBuilder::build).
    ///
    /// # Examples
    /// ```no_run
    /// use simple_http::{SimpleHttp, header};
    ///
    /// let conn = SimpleHttp::connect("https://api.example.com")
    ///     .header(header::ACCEPT, "text/xml")
    ///     .header("x-api-version", "v1")
    ///     .build();
    /// ```
    #[must_use]
    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers_mut().insert(key.as_ref(), value);
        self
    }

    /// Add multiple headers
    ///
    /// # Examples
    /// ```no_run
    /// use simple_http::SimpleHttp;
    ///
    /// let conn = SimpleHttp::connect("https://api.example.com")
    ///     .headers([("user-agent", "MyApp/1.0"), ("x-api-version", "v1")])
    ///     .build();
    /// ```
    #[must_use]
    pub fn headers<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let collected = self.headers_mut();
        for (key, value) in headers {
            collected.insert(key.as_ref(), value);
        }
        self
    }

    /// Set the Accept header
    #[must_use]
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header(header::ACCEPT, content_type)
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        self.header(header::USER_AGENT, user_agent)
    }
}

#[cfg(test)]
mod tests {
    use simple_http_client::Headers;

    use super::*;

    #[test]
    fn headers_override_defaults_case_insensitively() {
        let conn = ConnectionBuilder::new("https://example.com")
            .header("ACCEPT", "text/xml")
            .headers([("x-request-source", "cli")])
            .build()
            .unwrap();

        let expected = Headers::builtin().overlay(&Headers::from([("ACCEPT", "text/xml"), ("x-request-source", "cli")]));
        assert_eq!(conn.default_headers(), &expected);
        assert_eq!(conn.default_headers().get("accept"), Some("text/xml"));
    }

    #[test]
    fn invalid_header_fails_at_build() {
        let err = ConnectionBuilder::new("https://example.com")
            .header("bad header", "value")
            .build()
            .unwrap_err();
        assert!(err.is_builder());
    }
}
