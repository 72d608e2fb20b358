//! SimpleHttp Prelude
//!
//! The types needed to build a connection and send requests through it.

// Connection and its options
pub use crate::client::Connection;
pub use crate::config::{ConnectionOptions, ResolvedOptions, SslOptions, SslVerifyMode, TransportConfig};

// Requests and responses
pub use crate::http::{Headers, IntoMethod, Method, Params, RequestOptions, Response, Scheme};

// Error types
pub use crate::error::{Error, Kind, Result};

// Transport seam
pub use crate::transport::{Connector, Endpoint, HyperConnector, HyperTransport, Transport, TransportError};

// HTTP standard types from http crate
pub use ::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

// URL handling
pub use url::Url;
