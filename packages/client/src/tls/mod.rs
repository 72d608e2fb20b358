//! SSL trust configuration
//!
//! Maps the `ssl` option onto a rustls client configuration: a root store
//! and a certificate verifier.

pub mod errors;
pub mod roots;
pub mod verifier;

use std::sync::Arc;

use rustls::ClientConfig;

pub use errors::TlsError;
pub use roots::cert_store;
pub use verifier::NoCertificateVerification;

use crate::config::SslVerifyMode;

/// Builds the rustls configuration for `mode` using the `ring` provider.
///
/// `Peer` validates against [`cert_store`]. `None` accepts any certificate.
///
/// # Errors
///
/// Returns `TlsError` if no trust anchors could be loaded or the provider
/// rejects the protocol versions.
pub fn client_config(mode: SslVerifyMode) -> Result<Arc<ClientConfig>, TlsError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let builder = ClientConfig::builder_with_provider(provider.clone())
        .with_safe_default_protocol_versions()?;

    let config = match mode {
        SslVerifyMode::Peer => builder
            .with_root_certificates(cert_store()?)
            .with_no_client_auth(),
        SslVerifyMode::None => {
            tracing::warn!("TLS certificate verification is disabled; any certificate will be accepted");
            builder
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(NoCertificateVerification::new(provider)))
                .with_no_client_auth()
        }
    };

    Ok(Arc::new(config))
}
