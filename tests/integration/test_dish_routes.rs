//! Dish endpoint tests:
//! - GET /countries
//! - GET /dish/{country}
//! - GET /dish/id/{id}
//! - POST /dish/{id}
//! - PUT /dish/{id}
//! - DELETE /dish/{id}
//! - GET /dish

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

async fn create_dish(server: &TestServer, custom_id: &str, body: Value) -> String {
    let response = server.post(&format!("/dish/{}", custom_id)).json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_countries_empty_before_seeding() {
    let server = create_test_server();

    let response = server.get("/countries").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let countries: Vec<String> = response.json();
    assert!(countries.is_empty());
}

#[tokio::test]
async fn test_countries_sorted_and_unique_after_seed() {
    let server = create_test_server();
    server.post("/seed").await;

    let countries: Vec<String> = server.get("/countries").await.json();

    assert_eq!(countries.len(), 25);
    let mut sorted = countries.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(countries, sorted);
    assert!(countries.contains(&"Italy".to_string()));
}

#[tokio::test]
async fn test_random_dish_belongs_to_requested_country() {
    let server = create_test_server();
    server.post("/seed").await;

    for _ in 0..10 {
        let response = server.get("/dish/Japan").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let dish: Value = response.json();
        assert_eq!(dish["country"], "Japan");
        assert!(dish.get("_id").is_some());
    }
}

#[tokio::test]
async fn test_random_dish_unknown_country_is_not_found() {
    let server = create_test_server();
    server.post("/seed").await;

    let response = server.get("/dish/Atlantis").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "No dishes found for country: Atlantis");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_country_match_is_case_sensitive() {
    let server = create_test_server();
    server.post("/seed").await;

    let response = server.get("/dish/japan").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_dish_stores_custom_id_and_returns_store_id() {
    let server = create_test_server();

    let id = create_dish(
        &server,
        "abc123",
        json!({"name": "Test", "country": "Italy"}),
    )
    .await;

    let response = server.get(&format!("/dish/id/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let dish: Value = response.json();
    assert_eq!(dish["_id"], id.as_str());
    assert_eq!(dish["name"], "Test");
    assert_eq!(dish["custom_id"], "abc123");

    // The path segment is not an id
    let response = server.get("/dish/id/abc123").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_dish_rejects_empty_body() {
    let server = create_test_server();

    let response = server.post("/dish/x").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Dish data is required");
    let ids: Vec<String> = server.get("/dish").await.json();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_create_dish_rejects_unknown_fields() {
    let server = create_test_server();

    let response = server
        .post("/dish/x")
        .json(&json!({"name": "Test", "rating": 5}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("rating"));
}

#[tokio::test]
async fn test_create_dish_rejects_non_json_body() {
    let server = create_test_server();

    let response = server.post("/dish/x").text("name=Test").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_dish_changes_fields() {
    let server = create_test_server();
    let id = create_dish(&server, "d1", json!({"name": "Pizza", "country": "Italy"})).await;

    let response = server
        .put(&format!("/dish/{}", id))
        .json(&json!({"name": "Pizza Margherita"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let dish: Value = server.get(&format!("/dish/id/{}", id)).await.json();
    assert_eq!(dish["name"], "Pizza Margherita");
    assert_eq!(dish["country"], "Italy");
}

#[tokio::test]
async fn test_update_dish_with_identical_values_reports_not_found() {
    let server = create_test_server();
    let id = create_dish(&server, "d1", json!({"name": "Pizza"})).await;

    let response = server
        .put(&format!("/dish/{}", id))
        .json(&json!({"name": "Pizza"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_dish_is_not_found() {
    let server = create_test_server();

    let response = server
        .put(&format!("/dish/{}", uuid::Uuid::new_v4()))
        .json(&json!({"name": "Ghost"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_dish_rejects_empty_body() {
    let server = create_test_server();
    let id = create_dish(&server, "d1", json!({"name": "Pizza"})).await;

    let response = server.put(&format!("/dish/{}", id)).json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_dish_then_not_found() {
    let server = create_test_server();
    let id = create_dish(&server, "d1", json!({"name": "Pizza"})).await;

    let response = server.delete(&format!("/dish/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.delete(&format!("/dish/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.get(&format!("/dish/id/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_dish_ids() {
    let server = create_test_server();
    let first = create_dish(&server, "a", json!({"name": "One"})).await;
    let second = create_dish(&server, "b", json!({"name": "Two"})).await;

    let ids: Vec<String> = server.get("/dish").await.json();

    assert_eq!(ids, vec![first, second]);
}
