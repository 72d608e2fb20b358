//! TLS-specific error types for detailed error handling

/// Failures while assembling the TLS client configuration.
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("no trusted root certificates could be loaded")]
    NoTrustAnchors,
    #[error("TLS configuration rejected: {0}")]
    Config(#[from] rustls::Error),
    #[error("invalid server name {0:?}")]
    InvalidServerName(String),
}
