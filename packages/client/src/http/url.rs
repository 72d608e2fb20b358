//! Scheme handling and URL assembly

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{self, Error, Result};

/// The schemes a connection can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// 80 for http, 443 for https
    #[inline]
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_secure(self) -> bool {
        matches!(self, Scheme::Https)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("http") {
            Ok(Scheme::Http)
        } else if s.eq_ignore_ascii_case("https") {
            Ok(Scheme::Https)
        } else {
            Err(error::unsupported_scheme(s))
        }
    }
}

/// Scheme, host and explicit port pulled out of a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub scheme: Scheme,
    pub host: String,
    /// `None` when the URL relies on the scheme's default port.
    pub port: Option<u16>,
}

impl Origin {
    /// Decomposes `url` into scheme, host and port.
    ///
    /// # Errors
    ///
    /// Returns a builder error if `url` does not parse or has no host, and an
    /// unsupported-scheme error for anything but http/https.
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = Url::parse(url).map_err(|e| error::builder(format!("invalid URL `{url}`: {e}")))?;
        Self::from_url(&parsed)
    }

    /// # Errors
    ///
    /// See [`Origin::parse`].
    pub fn from_url(url: &Url) -> Result<Self> {
        let scheme = url.scheme().parse::<Scheme>()?;
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| error::builder(format!("URL `{url}` has no host")))?
            .to_string();

        // `Url::port` is `None` when the port equals the scheme default.
        Ok(Self {
            scheme,
            host,
            port: url.port(),
        })
    }

    #[inline]
    #[must_use]
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or_else(|| self.scheme.default_port())
    }
}

/// Joins scheme, host and `path` into an absolute URL string.
///
/// The port is written only when it differs from the scheme's default. No
/// normalization is applied to `path`: it is expected to be empty or start
/// with `/`.
#[must_use]
pub fn join(scheme: Scheme, host: &str, port: u16, path: &str) -> String {
    if port == scheme.default_port() {
        format!("{scheme}://{host}{path}")
    } else {
        format!("{scheme}://{host}:{port}{path}")
    }
}

/// Resolves a `Location` header value against the URL that produced it.
///
/// Absolute locations are used as-is; relative ones are joined onto `current`.
///
/// # Errors
///
/// Returns a redirect error if the location cannot be turned into a URL.
pub fn resolve_location(current: &Url, location: &str) -> Result<Url> {
    current
        .join(location.trim())
        .map_err(|e| error::redirect(format!("invalid Location `{location}`: {e}"), current.clone()))
}
