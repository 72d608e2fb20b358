//! Default transport: blocking HTTP/1.1 over hyper
//!
//! Each transport owns a current-thread tokio runtime and drives one request
//! at a time to completion with `block_on`. A fresh TCP (and TLS) connection
//! is opened per request; nothing is pooled or kept alive.

use std::sync::{Arc, OnceLock};

use bytes::Bytes;
use http::header::HOST;
use http::{HeaderMap, HeaderValue, Request};
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use rustls::ClientConfig;
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio_rustls::TlsConnector;
use url::{Position, Url};

use super::errors::TransportError;
use super::{Connector, Endpoint, Transport};
use crate::config::{ConfigValidator, SslVerifyMode, TransportConfig};
use crate::error::{self, Result};
use crate::http::Response;
use crate::http::compression::decode_body;
use crate::tls::{self, TlsError};

/// Builds [`HyperTransport`]s. TLS configurations are built once per verify
/// mode and shared by every transport this connector creates.
#[derive(Debug, Default)]
pub struct HyperConnector {
    config: TransportConfig,
    verified: OnceLock<Arc<ClientConfig>>,
    unverified: OnceLock<Arc<ClientConfig>>,
}

impl HyperConnector {
    /// # Errors
    ///
    /// Returns a builder error for zero timeouts.
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        ConfigValidator::validate_transport(&config).map_err(error::builder)?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    fn tls_config(&self, mode: SslVerifyMode) -> std::result::Result<Arc<ClientConfig>, TlsError> {
        let slot = match mode {
            SslVerifyMode::Peer => &self.verified,
            SslVerifyMode::None => &self.unverified,
        };
        if let Some(config) = slot.get() {
            return Ok(config.clone());
        }
        let config = tls::client_config(mode)?;
        Ok(slot.get_or_init(|| config).clone())
    }
}

impl Connector for HyperConnector {
    type Transport = HyperTransport;

    fn connect(&self, endpoint: &Endpoint) -> Result<HyperTransport> {
        let tls = endpoint
            .verify_mode
            .map(|mode| self.tls_config(mode))
            .transpose()
            .map_err(|e| error::transport(TransportError::from(e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_io()
            .enable_time()
            .build()
            .map_err(|e| error::transport(TransportError::Runtime(e)))?;

        Ok(HyperTransport {
            endpoint: endpoint.clone(),
            tls,
            config: self.config.clone(),
            runtime,
        })
    }
}

/// A transport bound to one endpoint.
#[derive(Debug)]
pub struct HyperTransport {
    endpoint: Endpoint,
    tls: Option<Arc<ClientConfig>>,
    config: TransportConfig,
    runtime: Runtime,
}

impl HyperTransport {
    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn execute(
        &mut self,
        method: http::Method,
        url: &Url,
        headers: &HeaderMap,
        body: Option<Bytes>,
    ) -> Result<Response> {
        self.exchange(method, url, headers, body)
            .map_err(|e| error::transport(e).with_url(url.clone()))
            .and_then(|(parts, body)| {
                let mut headers = parts.headers;
                let body = decode_body(&mut headers, body)?;
                Ok(Response::new(parts.status, headers, body, url.clone()))
            })
    }

    fn exchange(
        &self,
        method: http::Method,
        url: &Url,
        headers: &HeaderMap,
        body: Option<Bytes>,
    ) -> std::result::Result<(http::response::Parts, Bytes), TransportError> {
        if !self.endpoint.serves(url) {
            return Err(TransportError::EndpointMismatch {
                expected: self.endpoint.authority(),
                actual: url.to_string(),
            });
        }

        let mut request = Request::builder()
            .method(method)
            .uri(&url[Position::BeforePath..Position::AfterQuery])
            .body(Full::new(body.unwrap_or_default()))?;
        *request.headers_mut() = headers.clone();
        let authority = HeaderValue::from_str(&self.endpoint.authority())
            .map_err(|e| TransportError::InvalidRequest(e.into()))?;
        request.headers_mut().insert(HOST, authority);

        let roundtrip = self.roundtrip(request);
        self.runtime.block_on(async {
            match self.config.request_timeout {
                Some(limit) => tokio::time::timeout(limit, roundtrip)
                    .await
                    .map_err(|_| TransportError::Timeout("request"))?,
                None => roundtrip.await,
            }
        })
    }

    async fn roundtrip(
        &self,
        request: Request<Full<Bytes>>,
    ) -> std::result::Result<(http::response::Parts, Bytes), TransportError> {
        let host = self.endpoint.connect_host();
        let port = self.endpoint.port;
        let limit = self.config.connect_timeout;

        let stream = tokio::time::timeout(limit, TcpStream::connect((host, port)))
            .await
            .map_err(|_| TransportError::Timeout("connect"))?
            .map_err(|source| TransportError::Connect {
                addr: format!("{host}:{port}"),
                source,
            })?;

        match &self.tls {
            Some(config) => {
                let server_name = ServerName::try_from(host.to_string())
                    .map_err(|_| TlsError::InvalidServerName(host.to_string()))?;
                let connector = TlsConnector::from(config.clone());
                let tls_stream = tokio::time::timeout(limit, connector.connect(server_name, stream))
                    .await
                    .map_err(|_| TransportError::Timeout("TLS handshake"))?
                    .map_err(TransportError::Handshake)?;
                send(TokioIo::new(tls_stream), request).await
            }
            None => send(TokioIo::new(stream), request).await,
        }
    }
}

async fn send<I>(
    io: I,
    request: Request<Full<Bytes>>,
) -> std::result::Result<(http::response::Parts, Bytes), TransportError>
where
    I: hyper::rt::Read + hyper::rt::Write + Unpin + Send + 'static,
{
    let (mut sender, connection) = hyper::client::conn::http1::handshake(io).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::debug!("connection closed with error: {}", e);
        }
    });

    let response = sender.send_request(request).await?;
    let (parts, body) = response.into_parts();
    let body = body.collect().await?.to_bytes();
    Ok((parts, body))
}

impl Transport for HyperTransport {
    fn get(&mut self, url: &Url, headers: &HeaderMap) -> Result<Response> {
        self.execute(http::Method::GET, url, headers, None)
    }

    fn post(&mut self, url: &Url, headers: &HeaderMap, body: Bytes) -> Result<Response> {
        self.execute(http::Method::POST, url, headers, Some(body))
    }

    fn put(&mut self, url: &Url, headers: &HeaderMap, body: Bytes) -> Result<Response> {
        self.execute(http::Method::PUT, url, headers, Some(body))
    }

    fn delete(&mut self, url: &Url, headers: &HeaderMap) -> Result<Response> {
        self.execute(http::Method::DELETE, url, headers, None)
    }
}
