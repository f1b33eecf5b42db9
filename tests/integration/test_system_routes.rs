//! System endpoint tests:
//! - GET /health
//! - GET /
//! - GET /static/*
//! - GET /openapi.json

use std::path::Path;
use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use geodish_api::middleware::create_cors_layer;
use geodish_api::routes::{create_app, create_app_state};
use geodish_api::storage::InMemoryStorageBackend;
use serde_json::Value;
use tempfile::TempDir;

fn create_test_server(static_dir: &Path) -> TestServer {
    let storage = Arc::new(InMemoryStorageBackend::new());
    let app_state = create_app_state(storage, static_dir.to_path_buf()).unwrap();
    let cors = create_cors_layer(&[]).unwrap();
    TestServer::new(create_app(app_state, cors)).unwrap()
}

#[tokio::test]
async fn test_health() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(dir.path());

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "GeoDish API is running");
}

#[tokio::test]
async fn test_index_served_from_static_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>GeoDish</h1>").unwrap();
    let server = create_test_server(dir.path());

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "<h1>GeoDish</h1>");
}

#[tokio::test]
async fn test_missing_index_is_server_error() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(dir.path());

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "index.html not found");
}

#[tokio::test]
async fn test_static_files_served() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('geodish');").unwrap();
    let server = create_test_server(dir.path());

    let response = server.get("/static/app.js").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "console.log('geodish');");

    let response = server.get("/static/missing.js").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document() {
    let dir = TempDir::new().unwrap();
    let server = create_test_server(dir.path());

    let response = server.get("/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let doc: Value = response.json();
    assert_eq!(doc["info"]["title"], "GeoDish API");
    assert!(doc["paths"].get("/user/{user_id}/save-dish").is_some());
    assert!(doc["components"]["schemas"].get("Dish").is_some());
}
