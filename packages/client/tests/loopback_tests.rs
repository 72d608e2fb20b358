//! The hyper transport against a local axum server

use std::collections::HashMap;
use std::io::Write;
use std::net::SocketAddr;
use std::sync::mpsc;

use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use flate2::Compression;
use flate2::write::GzEncoder;
use simple_http_client::{Connection, ConnectionOptions, Method};

fn app() -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/members", get(|| async { "members" }).post(|| async { "posted to members" }))
        .route("/echo", axum::routing::put(echo))
        .route("/old", get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/users?page=1")]) }))
        .route("/gzip", get(gzipped))
        .route("/moved", get(|| async { (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/members"), (header::CONTENT_ENCODING, "gzip")]) }))
        .route("/empty", get(|| async { (StatusCode::NO_CONTENT, [(header::CONTENT_ENCODING, "gzip")]) }))
}

async fn list_users(Query(query): Query<HashMap<String, String>>, headers: HeaderMap) -> impl IntoResponse {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let page = query.get("page").cloned().unwrap_or_default();
    axum::Json(serde_json::json!({ "accept": accept, "page": page }))
}

async fn create_user() -> impl IntoResponse {
    (StatusCode::SEE_OTHER, [(header::LOCATION, "/members")])
}

async fn echo(headers: HeaderMap, body: String) -> String {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    format!("{content_type}|{body}")
}

async fn gzipped() -> impl IntoResponse {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b"compressed hello").expect("gzip write should succeed");
    let body = encoder.finish().expect("gzip finish should succeed");
    ([(header::CONTENT_ENCODING, "gzip")], body)
}

/// Serves `app` on an ephemeral loopback port from a background runtime.
fn spawn_server() -> SocketAddr {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("server runtime should start");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("loopback bind should succeed");
            tx.send(listener.local_addr().expect("listener has an address"))
                .expect("test thread is waiting");
            axum::serve(listener, app()).await.expect("server should run");
        });
    });
    rx.recv().expect("server should report its address")
}

fn connection(addr: SocketAddr) -> Connection {
    Connection::new(&format!("http://{addr}"), ConnectionOptions::new()).expect("connection should build")
}

#[test]
fn test_get_with_query_over_http() {
    let conn = connection(spawn_server());

    let response = conn
        .send_request("get", "/users", [("page", "3")])
        .expect("request should succeed");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().expect("body should be JSON");
    assert_eq!(body["accept"], "application/json");
    assert_eq!(body["page"], "3");
}

#[test]
fn test_see_other_is_followed_as_get() {
    let addr = spawn_server();
    let conn = connection(addr);

    let response = conn
        .send_request(Method::Post, "/users", [("first_name", "jane")])
        .expect("request should succeed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "members");
    assert_eq!(response.url().as_str(), format!("http://{addr}/members"));
    assert_eq!(response.redirect_chain().len(), 1);
}

#[test]
fn test_put_sends_form_body() {
    let conn = connection(spawn_server());

    let response = conn
        .send_request("put", "/echo", [("first_name", "jane"), ("last_name", "doe")])
        .expect("request should succeed");

    assert_eq!(
        response.text(),
        "application/x-www-form-urlencoded|first_name=jane&last_name=doe"
    );
}

#[test]
fn test_relative_redirect_keeps_location_query() {
    let conn = connection(spawn_server());

    let response = conn.send_request("get", "/old", ()).expect("request should succeed");

    let body: serde_json::Value = response.json().expect("body should be JSON");
    assert_eq!(body["page"], "1");
}

#[test]
fn test_redirect_budget_zero_returns_redirect() {
    let mut conn = connection(spawn_server());
    conn.set_max_redirects(0);

    let response = conn.send_request("get", "/old", ()).expect("request should succeed");

    assert_eq!(response.status(), 301);
    assert_eq!(response.location(), Some("/users?page=1"));
}

#[test]
fn test_gzip_body_is_decoded() {
    let conn = connection(spawn_server());

    let response = conn.send_request("get", "/gzip", ()).expect("request should succeed");

    assert_eq!(response.text(), "compressed hello");
    assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
}

#[test]
fn test_delete_on_missing_route_returns_status() {
    let conn = connection(spawn_server());

    let response = conn.send_request("delete", "/users", ()).expect("request should succeed");
    assert_eq!(response.status(), 405);
}

#[test]
fn test_encoded_redirect_without_body_is_followed() {
    let conn = connection(spawn_server());

    let response = conn.send_request("get", "/moved", ()).expect("request should succeed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "members");
    assert_eq!(response.redirect_chain().len(), 1);
}

#[test]
fn test_encoded_no_content_is_returned() {
    let conn = connection(spawn_server());

    let response = conn.send_request("get", "/empty", ()).expect("request should succeed");

    assert_eq!(response.status(), 204);
    assert!(response.body().is_empty());
}
