use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a builder error.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Creates an `Error` for a scheme other than `http`/`https`.
pub fn unsupported_scheme(scheme: impl Into<String>) -> Error {
    Error::new(Kind::UnsupportedScheme(scheme.into()))
}

/// Creates an `Error` for a verb the connection does not dispatch.
pub fn unhandled_method(method: impl Into<String>) -> Error {
    Error::new(Kind::UnhandledMethod(method.into()))
}

/// Creates an `Error` for a redirect error.
pub fn redirect<E: Into<BoxError>>(e: E, url: url::Url) -> Error {
    Error::new(Kind::Redirect).with(e.into()).with_url(url)
}

/// Creates an `Error` carrying a transport failure as its source, unchanged.
pub fn transport<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Transport).with(e.into())
}

/// Creates an `Error` for a decode error.
pub fn decode<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Decode).with(e.into())
}
