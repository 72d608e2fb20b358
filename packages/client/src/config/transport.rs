//! Timeouts passed through to the default transport

use std::time::Duration;

/// Settings for `HyperConnector`. The connection itself never times out;
/// these only bound the transport's own I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Upper bound on TCP connect plus TLS handshake.
    pub connect_timeout: Duration,
    /// Upper bound on sending the request and reading the full response.
    pub request_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl TransportConfig {
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}
