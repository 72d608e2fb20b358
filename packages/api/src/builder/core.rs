//! Core `ConnectionBuilder` structure and base functionality

use simple_http_client::{Connection, ConnectionOptions, Connector, Headers, HyperConnector, Result, SslOptions};

/// Fluent builder for a [`Connection`]
///
/// Options left untouched fall back to the connection defaults. Headers added
/// here replace the `headers` option as a whole and are laid over the
/// built-in defaults when requests are sent.
#[derive(Debug, Clone)]
pub struct ConnectionBuilder<C = HyperConnector> {
    /// Base URL; only scheme, host and port are used
    pub(crate) url: String,
    /// Options collected so far
    pub(crate) options: ConnectionOptions,
    /// Transport factory the connection will use
    pub(crate) connector: C,
}

impl ConnectionBuilder<HyperConnector> {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            options: ConnectionOptions::new(),
            connector: HyperConnector::default(),
        }
    }
}

impl<C> ConnectionBuilder<C> {
    /// Replace the transport factory, e.g. with one configured through
    /// `HyperConnector::with_config` or a test double.
    #[must_use]
    pub fn connector<D: Connector>(self, connector: D) -> ConnectionBuilder<D> {
        ConnectionBuilder {
            url: self.url,
            options: self.options,
            connector,
        }
    }

    /// Replace all options at once
    #[must_use]
    pub fn options(mut self, options: ConnectionOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable peer certificate verification
    ///
    /// # Examples
    /// ```no_run
    /// use simple_http::SimpleHttp;
    ///
    /// let conn = SimpleHttp::connect("https://self-signed.internal")
    ///     .ssl_verify(false)
    ///     .build();
    /// ```
    #[must_use]
    pub fn ssl_verify(mut self, verify: bool) -> Self {
        self.options.ssl = Some(SslOptions::verify(verify));
        self
    }

    /// Maximum number of redirect hops a single request follows
    #[must_use]
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.options.max_redirects = Some(max_redirects);
        self
    }

    /// Mutable access to the collected headers, starting from an empty set
    /// the first time.
    pub(crate) fn headers_mut(&mut self) -> &mut Headers {
        self.options.headers.get_or_insert_with(Headers::new)
    }
}

impl<C: Connector> ConnectionBuilder<C> {
    /// Build the connection
    ///
    /// # Errors
    ///
    /// Fails with an unsupported-scheme error for schemes other than
    /// http/https, and with a builder error for an unparseable URL or an
    /// invalid header.
    pub fn build(self) -> Result<Connection<C>> {
        tracing::debug!("building connection to {}", self.url);
        Connection::with_connector(&self.url, self.options, self.connector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_builder_uses_defaults() {
        let conn = ConnectionBuilder::new("https://example.com").build().unwrap();
        assert_eq!(conn.max_redirects(), 3);
        assert!(conn.ssl().verify);
        assert_eq!(conn.default_headers(), &Headers::builtin());
    }

    #[test]
    fn options_are_applied() {
        let conn = ConnectionBuilder::new("https://example.com")
            .ssl_verify(false)
            .max_redirects(7)
            .build()
            .unwrap();
        assert_eq!(conn.max_redirects(), 7);
        assert!(!conn.ssl().verify);
    }

    #[test]
    fn bad_scheme_fails_at_build() {
        let err = ConnectionBuilder::new("gopher://example.com").build().unwrap_err();
        assert!(err.is_unsupported_scheme());
    }
}
