//! Shared helpers for API integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt::oneshot`,
//! no TCP listener involved.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use mdedit_api::config::ServerConfig;
use mdedit_api::router::build_app_router;
use mdedit_api::state::AppState;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The database URL is unused: the pool
/// comes from `#[sqlx::test]`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        auto_migrate: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, body)).await
}

/// PUT a document body with an optional `X-Document-Version` header.
pub async fn put_document(
    app: Router,
    document_id: &str,
    content_md: &str,
    version: Option<&str>,
) -> Response<Body> {
    let body = serde_json::json!({ "contentMd": content_md });
    put_document_json(app, document_id, body, version).await
}

/// PUT an arbitrary JSON body to a document with an optional
/// `X-Document-Version` header.
pub async fn put_document_json(
    app: Router,
    document_id: &str,
    body: serde_json::Value,
    version: Option<&str>,
) -> Response<Body> {
    let mut request = json_request(Method::PUT, &format!("/api/documents/{document_id}"), body);
    if let Some(version) = version {
        request
            .headers_mut()
            .insert("x-document-version", HeaderValue::from_str(version).unwrap());
    }
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `X-Document-Version` response header as an integer.
pub fn version_header(response: &Response<Body>) -> i64 {
    response
        .headers()
        .get("x-document-version")
        .expect("response should carry x-document-version")
        .to_str()
        .unwrap()
        .parse()
        .unwrap()
}

/// Create a project and return `(project_id, document_id)`.
pub async fn create_project(pool: &PgPool, name: &str) -> (String, String) {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", serde_json::json!({ "name": name })).await;
    let created = body_json(response).await;
    let project_id = created["id"].as_str().unwrap().to_string();

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/projects/{project_id}/document")).await;
    let document = body_json(response).await;
    let document_id = document["id"].as_str().unwrap().to_string();

    (project_id, document_id)
}
