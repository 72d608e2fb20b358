//! Per-call request options and the request handed to a transport

use bytes::Bytes;
use http::HeaderMap;
use url::Url;

use super::method::Method;
use super::params::Params;

/// Options for a single `send_request` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub params: Params,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn params(mut self, params: impl Into<Params>) -> Self {
        self.params = params.into();
        self
    }
}

impl From<Params> for RequestOptions {
    fn from(params: Params) -> Self {
        Self { params }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for RequestOptions {
    fn from(pairs: [(K, V); N]) -> Self {
        Params::from(pairs).into()
    }
}

impl From<()> for RequestOptions {
    fn from((): ()) -> Self {
        Self::default()
    }
}

/// A fully built request: absolute URL, final headers and optional body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}
