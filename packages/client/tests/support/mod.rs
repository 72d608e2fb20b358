//! In-memory connector that answers from registered stubs and records every
//! request it sees.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use simple_http_client::error;
use simple_http_client::{Connector, Endpoint, Method, Response, Result, Transport, Url};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub endpoint: Endpoint,
}

#[derive(Debug)]
struct Stub {
    method: Method,
    url: String,
    body: Option<String>,
    status: StatusCode,
    headers: HeaderMap,
    response_body: String,
    hits: usize,
}

#[derive(Debug, Default)]
struct Registry {
    stubs: Vec<Stub>,
    requests: Vec<Recorded>,
}

/// Handle to a registered stub, used to read its hit count.
#[derive(Debug, Clone, Copy)]
pub struct StubId(usize);

#[derive(Debug, Clone, Default)]
pub struct StubServer {
    registry: Rc<RefCell<Registry>>,
}

impl StubServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a stub for `method` on the exact `url` (query included).
    pub fn stub(&self, method: Method, url: &str) -> StubBuilder<'_> {
        StubBuilder {
            server: self,
            stub: Stub {
                method,
                url: url.to_string(),
                body: None,
                status: StatusCode::OK,
                headers: HeaderMap::new(),
                response_body: String::new(),
                hits: 0,
            },
        }
    }

    pub fn hits(&self, id: StubId) -> usize {
        self.registry.borrow().stubs[id.0].hits
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.registry.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests()
            .pop()
            .expect("at least one request should have been sent")
    }

    fn answer(&self, endpoint: &Endpoint, method: Method, url: &Url, headers: &HeaderMap, body: Bytes) -> Result<Response> {
        let mut registry = self.registry.borrow_mut();
        registry.requests.push(Recorded {
            method,
            url: url.clone(),
            headers: headers.clone(),
            body: body.clone(),
            endpoint: endpoint.clone(),
        });

        let sent = String::from_utf8_lossy(&body).into_owned();
        let stub = registry
            .stubs
            .iter_mut()
            .rev()
            .find(|s| {
                s.method == method
                    && s.url == url.as_str()
                    && s.body.as_ref().is_none_or(|expected| *expected == sent)
            })
            .ok_or_else(|| error::transport(format!("no stub registered for {method} {url}")))?;

        stub.hits += 1;
        Ok(Response::new(
            stub.status,
            stub.headers.clone(),
            stub.response_body.clone(),
            url.clone(),
        ))
    }
}

pub struct StubBuilder<'a> {
    server: &'a StubServer,
    stub: Stub,
}

impl StubBuilder<'_> {
    /// Only match requests carrying exactly this body.
    pub fn with_body(mut self, body: &str) -> Self {
        self.stub.body = Some(body.to_string());
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.stub.status = StatusCode::from_u16(status).expect("stub status should be valid");
        self
    }

    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        self.stub.headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_str(value).expect("stub header should be valid"),
        );
        self
    }

    pub fn redirect(self, status: u16, location: &str) -> Self {
        self.status(status).header("location", location)
    }

    pub fn body(mut self, body: &str) -> Self {
        self.stub.response_body = body.to_string();
        self
    }

    pub fn mount(self) -> StubId {
        let mut registry = self.server.registry.borrow_mut();
        registry.stubs.push(self.stub);
        StubId(registry.stubs.len() - 1)
    }
}

impl Connector for StubServer {
    type Transport = StubTransport;

    fn connect(&self, endpoint: &Endpoint) -> Result<StubTransport> {
        Ok(StubTransport {
            server: self.clone(),
            endpoint: endpoint.clone(),
        })
    }
}

pub struct StubTransport {
    server: StubServer,
    endpoint: Endpoint,
}

impl Transport for StubTransport {
    fn get(&mut self, url: &Url, headers: &HeaderMap) -> Result<Response> {
        self.server.answer(&self.endpoint, Method::Get, url, headers, Bytes::new())
    }

    fn post(&mut self, url: &Url, headers: &HeaderMap, body: Bytes) -> Result<Response> {
        self.server.answer(&self.endpoint, Method::Post, url, headers, body)
    }

    fn put(&mut self, url: &Url, headers: &HeaderMap, body: Bytes) -> Result<Response> {
        self.server.answer(&self.endpoint, Method::Put, url, headers, body)
    }

    fn delete(&mut self, url: &Url, headers: &HeaderMap) -> Result<Response> {
        self.server.answer(&self.endpoint, Method::Delete, url, headers, Bytes::new())
    }
}

/// Connector that fails every connect attempt.
pub struct RefusingConnector;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub struct Refused;

impl Connector for RefusingConnector {
    type Transport = StubTransport;

    fn connect(&self, _endpoint: &Endpoint) -> Result<StubTransport> {
        Err(error::transport(Refused))
    }
}
