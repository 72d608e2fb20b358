//! Request building, verb dispatch and redirect following

use bytes::Bytes;
use http::HeaderMap;
use http::header::{CONTENT_TYPE, HeaderValue};
use url::Url;

use super::core::Connection;
use crate::error::{self, Result};
use crate::http::headers::FORM_URLENCODED;
use crate::http::url::resolve_location;
use crate::http::{HttpRequest, IntoMethod, Method, RequestOptions, Response};
use crate::redirect::{Hop, RedirectBudget, RedirectState, crosses_origin, remove_sensitive_headers};
use crate::transport::{Connector, Transport};

impl<C: Connector> Connection<C> {
    /// Sends `method` to `path` on this connection and follows redirects.
    ///
    /// `get` and `delete` carry `params` in the query string; `post` and `put`
    /// send them as a form body. Up to `max_redirects` redirect hops are
    /// followed; once the budget is spent the last redirect response is
    /// returned as-is. A 303 turns any non-GET request into a bare GET.
    ///
    /// # Errors
    ///
    /// - unhandled-method error for verbs other than get/post/put/delete,
    ///   raised before any network activity
    /// - redirect error if a `Location` header cannot be resolved
    /// - unsupported-scheme error if a redirect leaves http/https
    /// - transport error for anything the transport reports
    pub fn send_request(
        &self,
        method: impl IntoMethod,
        path: &str,
        options: impl Into<RequestOptions>,
    ) -> Result<Response> {
        let method = method.into_method()?;
        let RequestOptions { params } = options.into();

        let absolute = self.absolute_url(path);
        let mut url = Url::parse(&absolute)
            .map_err(|e| error::builder(format!("invalid request URL `{absolute}`: {e}")))?;
        let mut headers = self.default_headers.to_header_map()?;
        let mut hop = Hop::new(method, params);
        let mut budget = RedirectBudget::new(self.max_redirects);
        let mut chain = Vec::new();

        loop {
            let request = build_request(&hop, url.clone(), &headers)?;
            let sent = request.url.clone();
            let response = self.dispatch(request)?;

            let location = match RedirectState::classify(&response, &budget) {
                RedirectState::Terminal => return Ok(response.with_redirect_chain(chain)),
                RedirectState::Exhausted => {
                    tracing::debug!(
                        "redirect limit of {} reached at {}, returning {}",
                        self.max_redirects,
                        url,
                        response.status()
                    );
                    return Ok(response.with_redirect_chain(chain));
                }
                RedirectState::Eligible { location } => location,
            };

            let next = resolve_location(&sent, &location)?;
            if crosses_origin(&url, &next) {
                tracing::debug!("redirect from {} to {} leaves the origin, dropping credentials", url, next);
                remove_sensitive_headers(&mut headers);
            }

            hop = hop.follow(response.status());
            budget.consume();
            tracing::debug!(
                "following {} redirect to {} as {} ({} left)",
                response.status(),
                next,
                hop.method,
                budget.remaining()
            );

            chain.push(sent);
            url = next;
        }
    }

    /// Hands `request` to a transport bound to its URL's endpoint.
    fn dispatch(&self, request: HttpRequest) -> Result<Response> {
        let endpoint = self.endpoint_for(&request.url)?;
        let mut transport = self.connector.connect(&endpoint)?;

        tracing::debug!("{} {}", request.method, request.url);

        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let body = body.unwrap_or_default();
        match method {
            Method::Get => transport.get(&url, &headers),
            Method::Post => transport.post(&url, &headers, body),
            Method::Put => transport.put(&url, &headers, body),
            Method::Delete => transport.delete(&url, &headers),
        }
    }
}

/// Places the hop's params in the query (get/delete) or in a form body with
/// its `Content-Type` (post/put).
fn build_request(hop: &Hop, mut url: Url, headers: &HeaderMap) -> Result<HttpRequest> {
    let mut headers = headers.clone();
    let body = if hop.method.sends_body() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
        Some(Bytes::from(hop.params.to_form_body()?))
    } else {
        hop.params.append_to(&mut url);
        None
    };

    Ok(HttpRequest {
        method: hop.method,
        url,
        headers,
        body,
    })
}
