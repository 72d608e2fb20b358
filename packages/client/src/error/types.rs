use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `simple_http_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a connection or sending a request.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(crate) url: Option<url::Url>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    /// Invalid base URL or option value
    Builder,
    /// Scheme outside of `http`/`https`
    UnsupportedScheme(String),
    /// HTTP verb outside of `get`/`post`/`put`/`delete`
    UnhandledMethod(String),
    /// Redirect response carried an unusable `Location` header
    Redirect,
    /// Failure reported by the transport collaborator
    Transport,
    /// Response body could not be decoded
    Decode,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub(crate) fn with_url(mut self, url: url::Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&url::Url> {
        self.inner.url.as_ref()
    }

    /// Unwrap the underlying error untouched, e.g. the transport's own error value.
    #[must_use]
    pub fn into_source(self) -> Option<Box<dyn StdError + Send + Sync>> {
        self.inner.source
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("simple_http::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.kind {
            Kind::Builder => f.write_str("builder error")?,
            Kind::UnsupportedScheme(scheme) => write!(f, "unsupported scheme `{scheme}`")?,
            Kind::UnhandledMethod(method) => write!(f, "unhandled HTTP method `{method}`")?,
            Kind::Redirect => f.write_str("error following redirect")?,
            Kind::Transport => f.write_str("error sending request")?,
            Kind::Decode => f.write_str("error decoding response body")?,
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " for url ({url})")?;
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
