//! Header manipulation for redirects

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE, PROXY_AUTHORIZATION};
use url::Url;

/// Whether moving from `previous` to `next` changes host or port.
pub(crate) fn crosses_origin(previous: &Url, next: &Url) -> bool {
    next.host_str() != previous.host_str()
        || next.port_or_known_default() != previous.port_or_known_default()
}

/// Remove credentials that must not leak to another host.
pub(crate) fn remove_sensitive_headers(headers: &mut HeaderMap) {
    headers.remove(AUTHORIZATION);
    headers.remove(COOKIE);
    headers.remove("cookie2");
    headers.remove(PROXY_AUTHORIZATION);
}
