//! Shared utilities for router and end-to-end tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use products_service::config::ServiceConfig;
use products_service::http::HttpServer;
use products_service::lifecycle::Shutdown;
use products_service::store::ProductStore;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt; // For oneshot()

/// Key accepted by the default configuration.
pub const API_KEY: &str = "123456";

/// Router over a freshly seeded store, plus a handle to that store.
#[allow(dead_code)]
pub fn seeded_app() -> (Router, Arc<ProductStore>) {
    let server = HttpServer::new(ServiceConfig::default());
    (server.router(), server.store())
}

/// Router built from a custom configuration.
#[allow(dead_code)]
pub fn app_with_config(config: ServiceConfig) -> Router {
    HttpServer::new(config).router()
}

/// Build a request. A JSON body sets the JSON content type.
#[allow(dead_code)]
pub fn request(method: &str, uri: &str, body: Option<&Value>, key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Drive one request through the full pipeline. Empty bodies come back as `Value::Null`.
#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Authenticated request shorthand.
#[allow(dead_code)]
pub async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send(app, request(method, uri, body.as_ref(), Some(API_KEY))).await
}

/// Start the real server on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_server(
    config: ServiceConfig,
) -> (SocketAddr, Shutdown, JoinHandle<Result<(), std::io::Error>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    (addr, shutdown, handle)
}
