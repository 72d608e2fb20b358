//! Method and params carried from one hop to the next

use http::StatusCode;

use crate::http::{Method, Params};

/// The verb and params a hop is sent with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub method: Method,
    pub params: Params,
}

impl Hop {
    #[must_use]
    pub fn new(method: Method, params: Params) -> Self {
        Self { method, params }
    }

    /// The hop that follows a redirect with `status`.
    ///
    /// A 303 turns any non-GET request into a GET without params. Every other
    /// redirect status keeps the method and params.
    #[must_use]
    pub fn follow(self, status: StatusCode) -> Self {
        if status == StatusCode::SEE_OTHER && self.method != Method::Get {
            Self {
                method: Method::Get,
                params: Params::new(),
            }
        } else {
            self
        }
    }
}
