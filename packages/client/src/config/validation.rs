//! Option validation

use std::time::Duration;

use http::{HeaderName, HeaderValue};

use super::transport::TransportConfig;
use crate::http::Headers;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid header name: {0:?}")]
    InvalidHeaderName(String),

    #[error("Invalid value for header {0:?}")]
    InvalidHeaderValue(String),

    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Every header must be sendable as-is.
    ///
    /// # Errors
    ///
    /// Returns the first name or value that is not valid HTTP.
    pub fn validate_headers(headers: &Headers) -> ConfigResult<()> {
        for (name, value) in headers.iter() {
            if HeaderName::from_bytes(name.as_bytes()).is_err() {
                return Err(ConfigurationError::InvalidHeaderName(name.to_string()));
            }
            if HeaderValue::from_str(value).is_err() {
                return Err(ConfigurationError::InvalidHeaderValue(name.to_string()));
            }
        }
        Ok(())
    }

    /// Validate timeout duration
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` if the duration is zero.
    pub fn validate_timeout(timeout: Duration, name: &str) -> ConfigResult<()> {
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(format!(
                "{name} cannot be zero"
            )));
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidTimeout` for a zero timeout.
    pub fn validate_transport(config: &TransportConfig) -> ConfigResult<()> {
        Self::validate_timeout(config.connect_timeout, "connect_timeout")?;
        if let Some(timeout) = config.request_timeout {
            Self::validate_timeout(timeout, "request_timeout")?;
        }
        Ok(())
    }
}
