//! The closed set of verbs a connection dispatches

use std::fmt;
use std::str::FromStr;

use crate::error::{self, Error, Result};

/// HTTP verbs understood by `Connection::send_request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// `post` and `put` carry params as a form body; `get` and `delete` as a query string.
    #[inline]
    #[must_use]
    pub fn sends_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }

    #[must_use]
    pub fn to_http(self) -> http::Method {
        match self {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("get") {
            Ok(Method::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(Method::Post)
        } else if s.eq_ignore_ascii_case("put") {
            Ok(Method::Put)
        } else if s.eq_ignore_ascii_case("delete") {
            Ok(Method::Delete)
        } else {
            Err(error::unhandled_method(s))
        }
    }
}

/// A trait to try to convert some type into a `Method`.
///
/// Anything outside of the four supported verbs is rejected with an
/// unhandled-method error.
pub trait IntoMethod {
    /// # Errors
    ///
    /// Returns an unhandled-method error for any verb other than
    /// `get`, `post`, `put` or `delete`.
    fn into_method(self) -> Result<Method>;
}

impl IntoMethod for Method {
    fn into_method(self) -> Result<Method> {
        Ok(self)
    }
}

impl IntoMethod for &str {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}

impl IntoMethod for String {
    fn into_method(self) -> Result<Method> {
        self.parse()
    }
}

impl IntoMethod for &http::Method {
    fn into_method(self) -> Result<Method> {
        self.as_str().parse()
    }
}

impl IntoMethod for http::Method {
    fn into_method(self) -> Result<Method> {
        (&self).into_method()
    }
}
