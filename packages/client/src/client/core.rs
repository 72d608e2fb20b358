//! Connection state, construction and accessors

use crate::config::{ConnectionOptions, ResolvedOptions, SslOptions};
use crate::error::Result;
use crate::http::url::join;
use crate::http::{Headers, Origin, Scheme};
use crate::transport::{Connector, HyperConnector};

/// An HTTP(S) endpoint plus the options every request to it is sent with.
///
/// `scheme`, `ssl` and `max_redirects` may be changed between requests.
/// Nothing else is carried from one request to the next: no cookies, no
/// pooled connections. Not meant for concurrent mutation; give each
/// execution context its own connection.
#[derive(Debug)]
pub struct Connection<C = HyperConnector> {
    pub(crate) scheme: Scheme,
    pub(crate) host: String,
    /// Port written in the base URL, if any. Otherwise the scheme decides.
    pub(crate) explicit_port: Option<u16>,
    pub(crate) headers: Headers,
    pub(crate) default_headers: Headers,
    pub(crate) ssl: SslOptions,
    pub(crate) max_redirects: u32,
    pub(crate) connector: C,
}

impl Connection<HyperConnector> {
    /// The option set a connection gets when the caller supplies none.
    #[must_use]
    pub fn default_options() -> ResolvedOptions {
        ResolvedOptions::default()
    }

    /// Connection to `url` using the default hyper transport.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-scheme error for schemes other than http/https
    /// and a builder error for an unparseable URL or invalid header option.
    pub fn new(url: &str, options: ConnectionOptions) -> Result<Self> {
        Self::with_connector(url, options, HyperConnector::default())
    }
}

impl<C: Connector> Connection<C> {
    /// Connection to `url` whose requests go through `connector`.
    ///
    /// # Errors
    ///
    /// See [`Connection::new`].
    pub fn with_connector(url: &str, options: ConnectionOptions, connector: C) -> Result<Self> {
        let origin = Origin::parse(url)?;
        let resolved = ResolvedOptions::merge(options)?;
        let default_headers = Headers::builtin().overlay(&resolved.headers);

        tracing::debug!(
            "connection to {}://{} ({} default headers, max {} redirects)",
            origin.scheme,
            origin.host,
            default_headers.len(),
            resolved.max_redirects
        );

        Ok(Self {
            scheme: origin.scheme,
            host: origin.host,
            explicit_port: origin.port,
            headers: resolved.headers,
            default_headers,
            ssl: resolved.ssl,
            max_redirects: resolved.max_redirects,
            connector,
        })
    }
}

impl<C> Connection<C> {
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Switches between http and https (case-insensitive).
    ///
    /// A port taken from the base URL is kept; otherwise the port follows the
    /// new scheme.
    ///
    /// # Errors
    ///
    /// Returns an unsupported-scheme error, leaving scheme and port unchanged,
    /// for anything but http/https.
    pub fn set_scheme(&mut self, scheme: impl AsRef<str>) -> Result<()> {
        self.scheme = scheme.as_ref().parse()?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[inline]
    #[must_use]
    pub fn port(&self) -> u16 {
        self.explicit_port
            .unwrap_or_else(|| self.scheme.default_port())
    }

    /// True iff the scheme is https.
    #[inline]
    #[must_use]
    pub fn is_ssl(&self) -> bool {
        self.scheme.is_secure()
    }

    #[inline]
    #[must_use]
    pub fn ssl(&self) -> SslOptions {
        self.ssl
    }

    pub fn set_ssl(&mut self, ssl: SslOptions) {
        self.ssl = ssl;
    }

    #[inline]
    #[must_use]
    pub fn max_redirects(&self) -> u32 {
        self.max_redirects
    }

    pub fn set_max_redirects(&mut self, max_redirects: u32) {
        self.max_redirects = max_redirects;
    }

    /// The `headers` option as resolved at construction.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Headers sent with every request: built-in defaults with the `headers`
    /// option laid over them.
    #[must_use]
    pub fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    /// Scheme, host and `path` joined as-is. `path` should be empty or start
    /// with `/`.
    #[must_use]
    pub fn absolute_url(&self, path: &str) -> String {
        join(self.scheme, &self.host, self.port(), path)
    }

    #[must_use]
    pub fn connector(&self) -> &C {
        &self.connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::headers::USER_AGENT;

    fn connection() -> Connection {
        Connection::new("https://example.com", ConnectionOptions::new()).unwrap()
    }

    #[test]
    fn decomposes_base_url() {
        let conn = connection();
        assert_eq!(conn.scheme(), Scheme::Https);
        assert_eq!(conn.host(), "example.com");
        assert_eq!(conn.port(), 443);
        assert!(conn.is_ssl());
    }

    #[test]
    fn default_options() {
        let defaults = Connection::default_options();
        assert_eq!(defaults.headers, Headers::builtin());
        assert!(defaults.ssl.verify);
        assert_eq!(defaults.max_redirects, 3);
    }

    #[test]
    fn default_headers_without_user_headers() {
        let expected = Headers::from([
            ("Accept", "application/json"),
            ("User-Agent", USER_AGENT),
            ("Accept-Encoding", "gzip;q=1.0,deflate;q=0.6,identity;q=0.3"),
        ]);
        assert_eq!(connection().default_headers(), &expected);
    }

    #[test]
    fn user_options_override_defaults() {
        let headers = Headers::from([
            ("Accept", "application/json"),
            ("User-Agent", USER_AGENT),
            ("Accept-Encoding", "gzip;q=1.0,deflate;q=0.6,identity;q=0.3"),
        ]);
        let options = ConnectionOptions::new()
            .headers(headers.clone())
            .ssl(SslOptions::verify(false))
            .max_redirects(2);

        let conn = Connection::new("https://microsoft.com", options).unwrap();
        assert_eq!(conn.headers(), &headers);
        assert_eq!(conn.ssl(), SslOptions::verify(false));
        assert_eq!(conn.max_redirects(), 2);
    }

    #[test]
    fn user_headers_win_on_collision() {
        let options = ConnectionOptions::new().headers([("accept", "text/xml"), ("X-Api-Key", "k")]);
        let conn = Connection::new("https://example.com", options).unwrap();

        let merged = conn.default_headers();
        assert_eq!(merged.get("Accept"), Some("text/xml"));
        assert_eq!(merged.get("User-Agent"), Some(USER_AGENT));
        assert_eq!(merged.get("X-Api-Key"), Some("k"));
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn scheme_setter() {
        let mut conn = connection();

        conn.set_scheme("http").unwrap();
        assert_eq!(conn.scheme(), Scheme::Http);
        assert!(!conn.is_ssl());
        assert_eq!(conn.port(), 80);

        conn.set_scheme("HTTPS").unwrap();
        assert_eq!(conn.scheme(), Scheme::Https);
        assert!(conn.is_ssl());
    }

    #[test]
    fn unsupported_scheme_leaves_state_unchanged() {
        let mut conn = connection();
        let err = conn.set_scheme("ftp").unwrap_err();
        assert!(err.is_unsupported_scheme());
        assert_eq!(conn.scheme(), Scheme::Https);
        assert_eq!(conn.port(), 443);
    }

    #[test]
    fn explicit_port_survives_scheme_change() {
        let mut conn = Connection::new("http://localhost:8080", ConnectionOptions::new()).unwrap();
        conn.set_scheme(Scheme::Https).unwrap();
        assert_eq!(conn.port(), 8080);
        assert_eq!(conn.absolute_url("/a"), "https://localhost:8080/a");
    }

    #[test]
    fn absolute_url() {
        let conn = connection();
        assert_eq!(conn.absolute_url(""), "https://example.com");
        assert_eq!(
            conn.absolute_url("/oauth/v2/authorize"),
            "https://example.com/oauth/v2/authorize"
        );
    }

    #[test]
    fn rejects_unsupported_base_scheme() {
        let err = Connection::new("ftp://example.com", ConnectionOptions::new()).unwrap_err();
        assert!(err.is_unsupported_scheme());
    }
}
