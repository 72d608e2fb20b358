//! Trust anchors used when certificate verification is enabled

use rustls::RootCertStore;

use super::errors::TlsError;

/// Root certificates for peer verification.
///
/// Loads the platform's native store. Falls back to the bundled webpki roots
/// when native loading reports errors or finds nothing.
///
/// # Errors
///
/// Returns `TlsError::NoTrustAnchors` if the resulting store is empty.
pub fn cert_store() -> Result<RootCertStore, TlsError> {
    let mut root_store = RootCertStore::empty();

    let cert_result = rustls_native_certs::load_native_certs();
    for cert in cert_result.certs {
        if let Err(e) = root_store.add(cert) {
            tracing::warn!("Failed to add system certificate: {}", e);
        }
    }

    if !cert_result.errors.is_empty() || root_store.is_empty() {
        for err in &cert_result.errors {
            tracing::warn!("Certificate load error: {}", err);
        }
        root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    }

    tracing::debug!("Loaded {} root certificates", root_store.len());

    if root_store.is_empty() {
        return Err(TlsError::NoTrustAnchors);
    }
    Ok(root_store)
}
