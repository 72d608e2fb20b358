//! SSL trust options

use serde::Deserialize;

/// The `ssl` option: `{ verify: bool }`.
///
/// Verification is on by default. Turning it off accepts any certificate,
/// self-signed and expired ones included, and is only meant for talking to
/// development or test endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SslOptions {
    #[serde(default = "verify_by_default")]
    pub verify: bool,
}

fn verify_by_default() -> bool {
    true
}

impl Default for SslOptions {
    fn default() -> Self {
        Self { verify: true }
    }
}

impl SslOptions {
    #[must_use]
    pub fn verify(verify: bool) -> Self {
        Self { verify }
    }

    /// Certificate validation mode handed to the TLS layer.
    #[inline]
    #[must_use]
    pub fn verify_mode(&self) -> SslVerifyMode {
        if self.verify {
            SslVerifyMode::Peer
        } else {
            SslVerifyMode::None
        }
    }
}

/// How the peer's certificate chain is checked during the TLS handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SslVerifyMode {
    /// Chain must lead to a trusted root and match the host name.
    Peer,
    /// No checks at all. Insecure.
    None,
}
