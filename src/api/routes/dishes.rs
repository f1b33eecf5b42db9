//! Dish routes: countries, random dish by country and dish CRUD.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::app_state::AppState;
use super::error::{ApiError, ErrorResponse};
use super::extract::JsonBody;
use super::response::MessageResponse;
use crate::models::{Dish, DishFields};
use crate::services::DishRepository;

/// Create the dishes router
pub fn dishes_router() -> Router<AppState> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/dish", get(list_dish_ids))
        .route("/dish/id/{id}", get(get_dish))
        // GET samples by country; the other methods address a dish id.
        .route(
            "/dish/{key}",
            get(random_dish)
                .post(create_dish)
                .put(update_dish)
                .delete(delete_dish),
        )
}

/// Response for a newly created dish
#[derive(Debug, Serialize, ToSchema)]
pub struct DishCreatedResponse {
    pub message: String,
    pub id: Uuid,
}

/// GET /countries - List all countries with at least one dish
#[utoipa::path(
    get,
    path = "/countries",
    tag = "Dishes",
    responses(
        (status = 200, description = "Sorted country names", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_countries(
    State(dishes): State<DishRepository>,
) -> Result<Json<Vec<String>>, ApiError> {
    let countries = dishes.list_countries().await?;
    info!("Found {} countries", countries.len());
    Ok(Json(countries))
}

/// GET /dish/{country} - Get a random dish from a country
#[utoipa::path(
    get,
    path = "/dish/{country}",
    tag = "Dishes",
    params(("country" = String, Path, description = "Exact country name")),
    responses(
        (status = 200, description = "A random dish from the country", body = Dish),
        (status = 404, description = "No dishes for the country", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn random_dish(
    State(dishes): State<DishRepository>,
    Path(country): Path<String>,
) -> Result<Json<Dish>, ApiError> {
    match dishes.random_dish_by_country(&country).await? {
        Some(dish) => {
            info!(
                "Found dish: {} from {}",
                dish.name.as_deref().unwrap_or("<unnamed>"),
                country
            );
            Ok(Json(dish))
        }
        None => Err(ApiError::NotFound(format!(
            "No dishes found for country: {}",
            country
        ))),
    }
}

/// GET /dish/id/{id} - Get a dish by its id
#[utoipa::path(
    get,
    path = "/dish/id/{id}",
    tag = "Dishes",
    params(("id" = String, Path, description = "Dish id")),
    responses(
        (status = 200, description = "The dish", body = Dish),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    )
)]
pub async fn get_dish(
    State(dishes): State<DishRepository>,
    Path(id): Path<String>,
) -> Result<Json<Dish>, ApiError> {
    dishes
        .dish_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Dish not found".to_string()))
}

/// POST /dish/{id} - Create a dish
///
/// The path segment is kept as the dish's `custom_id`; the store assigns the
/// id returned in the response, and that id is what lookups use.
#[utoipa::path(
    post,
    path = "/dish/{id}",
    tag = "Dishes",
    params(("id" = String, Path, description = "Caller-chosen identifier, stored as custom_id")),
    request_body = DishFields,
    responses(
        (status = 201, description = "Dish created", body = DishCreatedResponse),
        (status = 400, description = "Missing, empty or invalid dish data", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_dish(
    State(dishes): State<DishRepository>,
    Path(custom_id): Path<String>,
    JsonBody(fields): JsonBody<DishFields>,
) -> Result<(StatusCode, Json<DishCreatedResponse>), ApiError> {
    let id = dishes.create_dish(fields, Some(custom_id.clone())).await?;
    info!("Created dish {} (custom id {})", id, custom_id);
    Ok((
        StatusCode::CREATED,
        Json(DishCreatedResponse {
            message: "Dish created".to_string(),
            id,
        }),
    ))
}

/// PUT /dish/{id} - Update fields of a dish
#[utoipa::path(
    put,
    path = "/dish/{id}",
    tag = "Dishes",
    params(("id" = String, Path, description = "Dish id")),
    request_body = DishFields,
    responses(
        (status = 200, description = "Dish updated", body = MessageResponse),
        (status = 400, description = "Invalid or empty dish data", body = ErrorResponse),
        (status = 404, description = "Dish not found or unchanged", body = ErrorResponse)
    )
)]
pub async fn update_dish(
    State(dishes): State<DishRepository>,
    Path(id): Path<String>,
    JsonBody(fields): JsonBody<DishFields>,
) -> Result<Json<MessageResponse>, ApiError> {
    if dishes.update_dish(&id, &fields).await? {
        info!("Updated dish {}", id);
        Ok(Json(MessageResponse::new("Dish updated")))
    } else {
        Err(ApiError::NotFound("Dish not found".to_string()))
    }
}

/// DELETE /dish/{id} - Delete a dish
#[utoipa::path(
    delete,
    path = "/dish/{id}",
    tag = "Dishes",
    params(("id" = String, Path, description = "Dish id")),
    responses(
        (status = 200, description = "Dish deleted", body = MessageResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    )
)]
pub async fn delete_dish(
    State(dishes): State<DishRepository>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if dishes.delete_dish(&id).await? {
        info!("Deleted dish {}", id);
        Ok(Json(MessageResponse::new("Dish deleted")))
    } else {
        Err(ApiError::NotFound("Dish not found".to_string()))
    }
}

/// GET /dish - List the ids of every dish
#[utoipa::path(
    get,
    path = "/dish",
    tag = "Dishes",
    responses(
        (status = 200, description = "All dish ids", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_dish_ids(
    State(dishes): State<DishRepository>,
) -> Result<Json<Vec<Uuid>>, ApiError> {
    Ok(Json(dishes.all_dish_ids().await?))
}
