//! User recipe endpoint tests:
//! - POST /user/{user_id}/save-dish
//! - GET /user/{user_id}/recipes
//! - GET /user/{user_id}/recipes/full
//! - PUT /user/{user_id}/recipes/{recipe_id}
//! - DELETE /user/{user_id}/recipes/{recipe_id}
//! - PUT/DELETE /user/{user_id}/recipes/full (reserved segment)

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

async fn create_dish(server: &TestServer) -> String {
    let response = server
        .post("/dish/paella")
        .json(&json!({
            "name": "Paella",
            "country": "Spain",
            "ingredients": ["rice", "saffron"],
            "instructions": "Cook slowly"
        }))
        .await;
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

async fn save(server: &TestServer, user: &str, body: Value) -> axum_test::TestResponse {
    server
        .post(&format!("/user/{}/save-dish", user))
        .json(&body)
        .await
}

#[tokio::test]
async fn test_save_dish_creates_snapshot() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;

    let response = save(&server, "alice", json!({"dishid": dish_id})).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe saved successfully");
    let recipe_id = body["recipeId"].as_str().unwrap().to_string();

    let recipes: Vec<Value> = server.get("/user/alice/recipes/full").await.json();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["_id"], recipe_id.as_str());
    assert_eq!(recipes[0]["dish_id"], dish_id.as_str());
    assert_eq!(recipes[0]["custom_name"], "Paella");
    assert_eq!(recipes[0]["original_dish"]["country"], "Spain");
    assert!(recipes[0].get("saved_at").is_some());
}

#[tokio::test]
async fn test_save_dish_with_custom_name() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;

    save(&server, "alice", json!({"dishid": dish_id, "customname": "Sunday paella"})).await;

    let recipes: Vec<Value> = server.get("/user/alice/recipes/full").await.json();
    assert_eq!(recipes[0]["custom_name"], "Sunday paella");
}

#[tokio::test]
async fn test_save_dish_requires_dishid() {
    let server = create_test_server();

    let response = save(&server, "alice", json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "dishid is required");
    let ids: Vec<String> = server.get("/user/alice/recipes").await.json();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_save_same_dish_twice_conflicts() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;

    let first = save(&server, "alice", json!({"dishid": dish_id})).await;
    let second = save(&server, "alice", json!({"dishid": dish_id})).await;

    assert_eq!(first.status_code(), StatusCode::CREATED);
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: Value = second.json();
    assert_eq!(body["code"], "already_saved");

    // A different user may save the same dish
    let other = save(&server, "bob", json!({"dishid": dish_id})).await;
    assert_eq!(other.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_save_missing_dish_conflicts() {
    let server = create_test_server();

    let response = save(
        &server,
        "alice",
        json!({"dishid": uuid::Uuid::new_v4().to_string()}),
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "dish_not_found");
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_snapshot_survives_dish_delete() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;
    save(&server, "alice", json!({"dishid": dish_id})).await;

    server.delete(&format!("/dish/{}", dish_id)).await;

    let recipes: Vec<Value> = server.get("/user/alice/recipes/full").await.json();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["original_dish"]["name"], "Paella");
}

#[tokio::test]
async fn test_recipe_ids_for_unknown_user_are_empty() {
    let server = create_test_server();

    let response = server.get("/user/nobody/recipes").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let ids: Vec<String> = response.json();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_update_recipe_renames_and_edits_snapshot() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;
    let body: Value = save(&server, "alice", json!({"dishid": dish_id})).await.json();
    let recipe_id = body["recipeId"].as_str().unwrap();

    let response = server
        .put(&format!("/user/alice/recipes/{}", recipe_id))
        .json(&json!({"custom_name": "Grandma's paella", "instructions": "Cook on fire"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe updated");

    let recipes: Vec<Value> = server.get("/user/alice/recipes/full").await.json();
    assert_eq!(recipes[0]["custom_name"], "Grandma's paella");
    assert_eq!(recipes[0]["original_dish"]["instructions"], "Cook on fire");
    assert_eq!(recipes[0]["original_dish"]["name"], "Paella");

    // The source dish is untouched
    let dish: Value = server.get(&format!("/dish/id/{}", dish_id)).await.json();
    assert_eq!(dish["instructions"], "Cook slowly");
}

#[tokio::test]
async fn test_update_recipe_of_another_user_is_not_found() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;
    let body: Value = save(&server, "alice", json!({"dishid": dish_id})).await.json();
    let recipe_id = body["recipeId"].as_str().unwrap();

    let response = server
        .put(&format!("/user/bob/recipes/{}", recipe_id))
        .json(&json!({"customname": "Stolen"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let recipes: Vec<Value> = server.get("/user/alice/recipes/full").await.json();
    assert_eq!(recipes[0]["custom_name"], "Paella");
}

#[tokio::test]
async fn test_update_recipe_rejects_unknown_fields() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;
    let body: Value = save(&server, "alice", json!({"dishid": dish_id})).await.json();
    let recipe_id = body["recipeId"].as_str().unwrap();

    let response = server
        .put(&format!("/user/alice/recipes/{}", recipe_id))
        .json(&json!({"user_id": "bob"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_recipe_is_scoped_to_user() {
    let server = create_test_server();
    let dish_id = create_dish(&server).await;
    let body: Value = save(&server, "alice", json!({"dishid": dish_id})).await.json();
    let recipe_id = body["recipeId"].as_str().unwrap().to_string();

    let response = server
        .delete(&format!("/user/bob/recipes/{}", recipe_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .delete(&format!("/user/alice/recipes/{}", recipe_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Recipe deleted successfully");

    let ids: Vec<String> = server.get("/user/alice/recipes").await.json();
    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_delete_with_malformed_id_is_not_found() {
    let server = create_test_server();

    let response = server.delete("/user/alice/recipes/not-an-id").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn test_update_on_full_segment_is_not_found() {
    let server = create_test_server();

    let response = server
        .put("/user/alice/recipes/full")
        .json(&json!({"customname": "Renamed"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Recipe not found");
}

#[tokio::test]
async fn test_delete_on_full_segment_is_not_found() {
    let server = create_test_server();

    let response = server.delete("/user/alice/recipes/full").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}
