//! HTTP method shorthands
//!
//! Terminal methods for sending GET, POST, PUT and DELETE requests through a
//! connection. Each one is `send_request` with the verb filled in.

use simple_http_client::{Connection, Connector, Method, RequestOptions, Response, Result};

/// Verb shorthands for [`Connection::send_request`]
pub trait ConnectionExt {
    /// Execute a GET request, `params` going into the query string
    ///
    /// # Errors
    ///
    /// Transport failures, unusable redirect targets.
    ///
    /// # Examples
    /// ```no_run
    /// use simple_http::{ConnectionExt, SimpleHttp};
    ///
    /// let conn = SimpleHttp::new("https://api.example.com").unwrap();
    /// let users = conn.get("/users", [("page", "2")]).unwrap();
    /// ```
    fn get(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response>;

    /// Execute a POST request with `params` as a form body
    ///
    /// # Errors
    ///
    /// See [`ConnectionExt::get`].
    fn post(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response>;

    /// Execute a PUT request with `params` as a form body
    ///
    /// # Errors
    ///
    /// See [`ConnectionExt::get`].
    fn put(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response>;

    /// Execute a DELETE request, `params` going into the query string
    ///
    /// # Errors
    ///
    /// See [`ConnectionExt::get`].
    fn delete(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response>;
}

impl<C: Connector> ConnectionExt for Connection<C> {
    fn get(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response> {
        self.send_request(Method::Get, path, params)
    }

    fn post(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response> {
        self.send_request(Method::Post, path, params)
    }

    fn put(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response> {
        self.send_request(Method::Put, path, params)
    }

    fn delete(&self, path: &str, params: impl Into<RequestOptions>) -> Result<Response> {
        self.send_request(Method::Delete, path, params)
    }
}
