//! Failures of the default transport

use crate::tls::TlsError;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to start transport runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("timed out during {0}")]
    Timeout(&'static str),
    #[error("TLS setup failed: {0}")]
    Tls(#[from] TlsError),
    #[error("TLS handshake failed: {0}")]
    Handshake(#[source] std::io::Error),
    #[error("HTTP protocol error: {0}")]
    Http(#[from] hyper::Error),
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] http::Error),
    #[error("transport bound to {expected} cannot send to {actual}")]
    EndpointMismatch { expected: String, actual: String },
}
