//! Transport collaborator
//!
//! The connection never touches sockets. It asks a [`Connector`] for a
//! [`Transport`] bound to one host/port/TLS mode and calls one of four verb
//! operations on it. Any failure the transport reports is surfaced to the
//! caller as a transport error carrying the original value as its source.

pub mod blocking;
pub mod errors;

use bytes::Bytes;
use http::HeaderMap;
use url::Url;

pub use blocking::{HyperConnector, HyperTransport};
pub use errors::TransportError;

use crate::config::{SslOptions, SslVerifyMode};
use crate::error::Result;
use crate::http::{Response, Scheme};

/// Verb-based request interface of the networking layer.
pub trait Transport {
    fn get(&mut self, url: &Url, headers: &HeaderMap) -> Result<Response>;

    fn post(&mut self, url: &Url, headers: &HeaderMap, body: Bytes) -> Result<Response>;

    fn put(&mut self, url: &Url, headers: &HeaderMap, body: Bytes) -> Result<Response>;

    fn delete(&mut self, url: &Url, headers: &HeaderMap) -> Result<Response>;
}

/// Builds transports bound to an [`Endpoint`].
pub trait Connector {
    type Transport: Transport;

    /// # Errors
    ///
    /// Returns a transport error if the transport cannot be set up, e.g. the
    /// TLS configuration for the requested verify mode cannot be built.
    fn connect(&self, endpoint: &Endpoint) -> Result<Self::Transport>;
}

/// Where a transport sends its requests and how it secures them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    /// Present iff `scheme` is https.
    pub verify_mode: Option<SslVerifyMode>,
}

impl Endpoint {
    #[must_use]
    pub fn new(scheme: Scheme, host: impl Into<String>, port: u16, ssl: &SslOptions) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
            verify_mode: scheme.is_secure().then(|| ssl.verify_mode()),
        }
    }

    /// Host without IPv6 brackets, for DNS/connect and TLS server names.
    #[must_use]
    pub fn connect_host(&self) -> &str {
        self.host.trim_start_matches('[').trim_end_matches(']')
    }

    /// Value for the `Host` request header.
    #[must_use]
    pub fn authority(&self) -> String {
        if self.port == self.scheme.default_port() {
            self.host.clone()
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Whether `url` points at this endpoint.
    #[must_use]
    pub fn serves(&self, url: &Url) -> bool {
        url.scheme() == self.scheme.as_str()
            && url.host_str() == Some(self.host.as_str())
            && url.port_or_known_default() == Some(self.port)
    }
}
