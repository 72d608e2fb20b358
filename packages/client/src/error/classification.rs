use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error is from a type Builder.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if a scheme other than `http`/`https` was rejected.
    #[must_use]
    pub fn is_unsupported_scheme(&self) -> bool {
        matches!(self.inner.kind, Kind::UnsupportedScheme(_))
    }

    /// Returns true if the request verb was rejected before any network activity.
    #[must_use]
    pub fn is_unhandled_method(&self) -> bool {
        matches!(self.inner.kind, Kind::UnhandledMethod(_))
    }

    /// Returns true if a redirect could not be followed.
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self.inner.kind, Kind::Redirect)
    }

    /// Returns true if the error came from the transport.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.inner.kind, Kind::Transport)
    }

    /// Returns true if the error is related to decoding the response's body
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self.inner.kind, Kind::Decode)
    }

    /// Returns true if the transport gave up waiting.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        let mut source = std::error::Error::source(self);

        while let Some(err) = source {
            if let Some(transport) = err.downcast_ref::<crate::transport::TransportError>()
                && matches!(transport, crate::transport::TransportError::Timeout(_))
            {
                return true;
            }
            if let Some(io) = err.downcast_ref::<std::io::Error>()
                && io.kind() == std::io::ErrorKind::TimedOut
            {
                return true;
            }
            source = err.source();
        }

        false
    }
}
