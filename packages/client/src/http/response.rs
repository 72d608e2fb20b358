//! Raw HTTP response: status, headers, body

use bytes::Bytes;
use http::{HeaderMap, StatusCode, header::LOCATION};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{self, Result};

/// Status codes the redirect state machine follows.
pub const REDIRECT_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// A response as returned by the transport, plus the redirect hops that led to it.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    url: Url,
    redirect_chain: Vec<Url>,
}

impl Response {
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>, url: Url) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            url,
            redirect_chain: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// URL of the request that produced this response.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// URLs requested before this one while following redirects, oldest first.
    #[must_use]
    pub fn redirect_chain(&self) -> &[Url] {
        &self.redirect_chain
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        REDIRECT_CODES.contains(&self.status.as_u16())
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Body as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| error::decode(e).with_url(self.url.clone()))
    }

    pub(crate) fn with_redirect_chain(mut self, chain: Vec<Url>) -> Self {
        self.redirect_chain = chain;
        self
    }
}
