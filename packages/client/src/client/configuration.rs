//! SSL settings and transport construction for a connection

use rustls::RootCertStore;
use url::Url;

use super::core::Connection;
use crate::config::SslVerifyMode;
use crate::error::Result;
use crate::http::Origin;
use crate::tls::{self, TlsError};
use crate::transport::{Connector, Endpoint};

impl<C> Connection<C> {
    /// `Peer` when the `ssl` option asks for verification, `None` otherwise.
    #[inline]
    #[must_use]
    pub fn ssl_verify_mode(&self) -> SslVerifyMode {
        self.ssl.verify_mode()
    }

    /// Trust anchors used when verification is on.
    ///
    /// # Errors
    ///
    /// Returns `TlsError::NoTrustAnchors` if neither the platform store nor
    /// the bundled roots yield a certificate.
    pub fn ssl_cert_store(&self) -> std::result::Result<RootCertStore, TlsError> {
        tls::cert_store()
    }

    /// Endpoint for the connection's own host, port and scheme.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.scheme, self.host.clone(), self.port(), &self.ssl)
    }

    /// Endpoint serving `url`, which may be a redirect target on another host.
    pub(crate) fn endpoint_for(&self, url: &Url) -> Result<Endpoint> {
        let origin = Origin::from_url(url)?;
        let port = origin.port_or_default();
        Ok(Endpoint::new(origin.scheme, origin.host, port, &self.ssl))
    }
}

impl<C: Connector> Connection<C> {
    /// A transport bound to the connection's host, port and TLS mode.
    ///
    /// TLS is enabled iff the scheme is https, with the verify mode taken from
    /// the `ssl` option.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the connector cannot build the transport.
    pub fn http_connection(&self) -> Result<C::Transport> {
        self.connector.connect(&self.endpoint())
    }
}
