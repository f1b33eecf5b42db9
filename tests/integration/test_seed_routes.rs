//! Seed and metrics endpoint tests:
//! - POST /seed
//! - POST /force-seed
//! - GET /seed-info
//! - GET /metrics

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use geodish_api::routes::{create_app, create_app_state};
use geodish_api::storage::InMemoryStorageBackend;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

fn create_test_server() -> TestServer {
    let storage = Arc::new(InMemoryStorageBackend::new());
    let app_state = create_app_state(storage, "static".into()).unwrap();
    TestServer::new(create_app(app_state, CorsLayer::permissive())).unwrap()
}

#[tokio::test]
async fn test_seed_then_seed_again_is_a_no_op() {
    let server = create_test_server();

    let response = server.post("/seed").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Successfully seeded 125 dishes from 25 countries");
    let ids_before: Vec<String> = server.get("/dish").await.json();

    let response = server.post("/seed").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body["message"],
        "Database already seeded with 25 countries and 125 dishes"
    );
    let ids_after: Vec<String> = server.get("/dish").await.json();
    assert_eq!(ids_before, ids_after);
}

#[tokio::test]
async fn test_force_seed_replaces_dishes_and_clears_recipes() {
    let server = create_test_server();
    server.post("/seed").await;
    let old_ids: Vec<String> = server.get("/dish").await.json();
    server
        .post("/user/alice/save-dish")
        .json(&json!({"dishid": old_ids[0]}))
        .await;

    let response = server.post("/force-seed").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Successfully seeded 125 dishes from 25 countries");

    let new_ids: Vec<String> = server.get("/dish").await.json();
    assert_eq!(new_ids.len(), 125);
    assert!(new_ids.iter().all(|id| !old_ids.contains(id)));
    let recipes: Vec<String> = server.get("/user/alice/recipes").await.json();
    assert!(recipes.is_empty());
}

#[tokio::test]
async fn test_force_seed_drops_custom_dishes() {
    let server = create_test_server();
    let created: Value = server
        .post("/dish/mine")
        .json(&json!({"name": "Moon Cake", "country": "Atlantis"}))
        .await
        .json();
    let id = created["id"].as_str().unwrap();
    assert_eq!(
        server.get(&format!("/dish/id/{}", id)).await.status_code(),
        StatusCode::OK
    );

    server.post("/force-seed").await;

    let response = server.get(&format!("/dish/id/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let response = server.get("/dish/Atlantis").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seed_info_describes_catalog() {
    let server = create_test_server();

    let response = server.get("/seed-info").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let stats: Value = response.json();
    assert_eq!(stats["total_countries"], 25);
    assert_eq!(stats["total_dishes"], 125);
    assert_eq!(stats["dishes_per_country"], 5);
    assert_eq!(stats["countries"].as_array().unwrap().len(), 25);
}

#[tokio::test]
async fn test_metrics_before_and_after_seeding() {
    let server = create_test_server();

    let body: Value = server.get("/metrics").await.json();
    assert_eq!(
        body,
        json!({"total_dishes": 0, "total_countries": 0, "status": "healthy"})
    );

    server.post("/seed").await;

    let response = server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"total_dishes": 125, "total_countries": 25, "status": "healthy"})
    );
}
