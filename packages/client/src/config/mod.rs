//! Connection configuration
//!
//! Caller-supplied options are merged over fixed defaults once, when the
//! connection is built. Every recognized key is enumerated explicitly.

pub mod options;
pub mod security;
pub mod transport;
pub mod validation;

pub use options::{ConnectionOptions, ResolvedOptions};
pub use security::{SslOptions, SslVerifyMode};
pub use transport::TransportConfig;
pub use validation::{ConfigValidator, ConfigurationError};

/// Redirect hops a single `send_request` call follows unless overridden.
pub const DEFAULT_MAX_REDIRECTS: u32 = 3;
