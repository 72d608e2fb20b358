//! Header set with case-preserving names
//!
//! Header names keep the casing the caller gave them while lookups and
//! overrides compare names case-insensitively, as HTTP does.

use std::fmt;

use http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::{self, Result};

/// `Accept` sent unless the caller overrides it.
pub const DEFAULT_ACCEPT: &str = "application/json";

/// `Accept-Encoding` sent unless the caller overrides it.
pub const DEFAULT_ACCEPT_ENCODING: &str = "gzip;q=1.0,deflate;q=0.6,identity;q=0.3";

/// `User-Agent` sent unless the caller overrides it.
pub const USER_AGENT: &str = concat!("SimpleHttp ", env!("CARGO_PKG_VERSION"));

/// Media type for request bodies of `post`/`put`.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Ordered header map; names compare case-insensitively, keep their casing.
#[derive(Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Creates an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in headers every connection starts from.
    #[must_use]
    pub fn builtin() -> Self {
        Headers::from([
            ("Accept", DEFAULT_ACCEPT),
            ("User-Agent", USER_AGENT),
            ("Accept-Encoding", DEFAULT_ACCEPT_ENCODING),
        ])
    }

    /// Sets a header, replacing any existing entry with the same name.
    ///
    /// The replaced entry takes the casing of `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.entries[idx] = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Removes a header, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `self` with every entry of `overrides` laid on top.
    #[must_use]
    pub fn overlay(&self, overrides: &Headers) -> Headers {
        let mut merged = self.clone();
        for (name, value) in overrides.iter() {
            merged.insert(name, value);
        }
        merged
    }

    /// Converts to an `http::HeaderMap` for the wire.
    ///
    /// # Errors
    ///
    /// Returns a builder error if a name or value is not valid HTTP.
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| error::builder(format!("invalid header name `{name}`: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| error::builder(format!("invalid value for header `{name}`: {e}")))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

impl PartialEq for Headers {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Headers {}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Headers, A::Error> {
                let mut headers = Headers::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    headers.insert(name, value);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}
