//! Caller options and their merge over the built-in defaults

use serde::Deserialize;

use super::DEFAULT_MAX_REDIRECTS;
use super::security::SslOptions;
use super::validation::ConfigValidator;
use crate::error::{self, Result};
use crate::http::Headers;

/// Options accepted by `Connection::new`.
///
/// Each field left as `None` falls back to its default. A field that is set
/// replaces the default value wholesale. Unknown keys in deserialized input
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConnectionOptions {
    pub headers: Option<Headers>,
    pub ssl: Option<SslOptions>,
    pub max_redirects: Option<u32>,
}

impl ConnectionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn headers(mut self, headers: impl Into<Headers>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    #[must_use]
    pub fn ssl(mut self, ssl: SslOptions) -> Self {
        self.ssl = Some(ssl);
        self
    }

    #[must_use]
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = Some(max_redirects);
        self
    }

    /// Reads options from a JSON object such as
    /// `{"headers": {"Accept": "text/html"}, "ssl": {"verify": false}, "max_redirects": 2}`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the JSON is malformed or a known key has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(error::builder)
    }
}

/// The option set after merging, with every key present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub headers: Headers,
    pub ssl: SslOptions,
    pub max_redirects: u32,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            headers: Headers::builtin(),
            ssl: SslOptions::default(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl ResolvedOptions {
    /// Caller value if present, else default, key by key.
    ///
    /// # Errors
    ///
    /// Returns a builder error if a supplied header is not valid HTTP.
    pub fn merge(options: ConnectionOptions) -> Result<Self> {
        let defaults = Self::default();

        let headers = options.headers.unwrap_or(defaults.headers);
        ConfigValidator::validate_headers(&headers).map_err(error::builder)?;

        Ok(Self {
            headers,
            ssl: options.ssl.unwrap_or(defaults.ssl),
            max_redirects: options.max_redirects.unwrap_or(defaults.max_redirects),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_resolve_to_defaults() {
        let resolved = ResolvedOptions::merge(ConnectionOptions::new()).unwrap();
        assert_eq!(resolved, ResolvedOptions::default());
        assert_eq!(resolved.max_redirects, 3);
        assert!(resolved.ssl.verify);
    }

    #[test]
    fn supplied_keys_replace_defaults() {
        let headers = Headers::from([("Accept", "text/html")]);
        let options = ConnectionOptions::new()
            .headers(headers.clone())
            .ssl(SslOptions::verify(false))
            .max_redirects(2);

        let resolved = ResolvedOptions::merge(options).unwrap();
        assert_eq!(resolved.headers, headers);
        assert_eq!(resolved.ssl, SslOptions::verify(false));
        assert_eq!(resolved.max_redirects, 2);
    }

    #[test]
    fn invalid_headers_fail_the_merge() {
        let options = ConnectionOptions::new().headers([("X-Bad", "a\r\nb")]);
        assert!(ResolvedOptions::merge(options).unwrap_err().is_builder());
    }

    #[test]
    fn parses_json_and_ignores_unknown_keys() {
        let options = ConnectionOptions::from_json(
            r#"{"ssl": {"verify": false}, "max_redirects": 0, "proxy": "http://ignored"}"#,
        )
        .unwrap();
        assert_eq!(options.ssl, Some(SslOptions::verify(false)));
        assert_eq!(options.max_redirects, Some(0));
        assert_eq!(options.headers, None);
    }

    #[test]
    fn negative_redirect_limit_is_rejected() {
        let err = ConnectionOptions::from_json(r#"{"max_redirects": -1}"#).unwrap_err();
        assert!(err.is_builder());
    }
}
