//! User recipe routes: save a dish, list, rename/edit and delete saved copies.

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::app_state::AppState;
use super::error::{ApiError, ErrorResponse};
use super::extract::JsonBody;
use super::response::MessageResponse;
use crate::models::{RecipeFields, UserRecipe};
use crate::services::RecipeRepository;

/// Create the user recipes router
pub fn recipes_router() -> Router<AppState> {
    Router::new()
        .route("/user/{user_id}/save-dish", post(save_dish))
        .route("/user/{user_id}/recipes", get(list_recipe_ids))
        .route(
            "/user/{user_id}/recipes/full",
            get(list_recipes).fallback(recipe_not_found),
        )
        .route(
            "/user/{user_id}/recipes/{recipe_id}",
            put(update_recipe).delete(delete_recipe),
        )
}

/// Request body for saving a dish to a user's recipes
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SaveRecipeRequest {
    #[serde(default, alias = "dish_id")]
    pub dishid: Option<String>,
    #[serde(default, alias = "custom_name")]
    pub customname: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveRecipeResponse {
    pub message: String,
    #[serde(rename = "recipeId")]
    pub recipe_id: Uuid,
}

/// POST /user/{user_id}/save-dish - Save a snapshot of a dish for a user
#[utoipa::path(
    post,
    path = "/user/{user_id}/save-dish",
    tag = "Recipes",
    params(("user_id" = String, Path, description = "User identifier")),
    request_body = SaveRecipeRequest,
    responses(
        (status = 201, description = "Recipe saved", body = SaveRecipeResponse),
        (status = 400, description = "dishid is required", body = ErrorResponse),
        (status = 409, description = "Dish not found (code dish_not_found) or already saved (code already_saved)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn save_dish(
    State(recipes): State<RecipeRepository>,
    Path(user_id): Path<String>,
    JsonBody(request): JsonBody<SaveRecipeRequest>,
) -> Result<(StatusCode, Json<SaveRecipeResponse>), ApiError> {
    let Some(dish_id) = request.dishid else {
        return Err(ApiError::BadRequest("dishid is required".to_string()));
    };

    let recipe_id = recipes
        .save_recipe(&user_id, &dish_id, request.customname)
        .await?;
    info!(
        "Saved dish {} as recipe {} for user {}",
        dish_id, recipe_id, user_id
    );

    Ok((
        StatusCode::CREATED,
        Json(SaveRecipeResponse {
            message: "Recipe saved successfully".to_string(),
            recipe_id,
        }),
    ))
}

/// GET /user/{user_id}/recipes/full - Full saved recipes for a user
#[utoipa::path(
    get,
    path = "/user/{user_id}/recipes/full",
    tag = "Recipes",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Saved recipes with dish snapshots", body = Vec<UserRecipe>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_recipes(
    State(recipes): State<RecipeRepository>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserRecipe>>, ApiError> {
    let saved = recipes.list_recipes(&user_id).await?;
    info!("Found {} recipes for user {}", saved.len(), user_id);
    Ok(Json(saved))
}

/// GET /user/{user_id}/recipes - Saved recipe ids for a user
#[utoipa::path(
    get,
    path = "/user/{user_id}/recipes",
    tag = "Recipes",
    params(("user_id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Saved recipe ids", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_recipe_ids(
    State(recipes): State<RecipeRepository>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Uuid>>, ApiError> {
    Ok(Json(recipes.list_recipe_ids(&user_id).await?))
}

/// PUT /user/{user_id}/recipes/{recipe_id} - Rename a recipe or edit its snapshot
#[utoipa::path(
    put,
    path = "/user/{user_id}/recipes/{recipe_id}",
    tag = "Recipes",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("recipe_id" = String, Path, description = "Recipe id")
    ),
    request_body = RecipeFields,
    responses(
        (status = 200, description = "Recipe updated", body = MessageResponse),
        (status = 400, description = "Invalid or empty recipe data", body = ErrorResponse),
        (status = 404, description = "Recipe not found for this user", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(recipes): State<RecipeRepository>,
    Path((user_id, recipe_id)): Path<(String, String)>,
    JsonBody(fields): JsonBody<RecipeFields>,
) -> Result<Json<MessageResponse>, ApiError> {
    if recipes.update_recipe(&user_id, &recipe_id, &fields).await? {
        info!("Updated recipe {} for user {}", recipe_id, user_id);
        Ok(Json(MessageResponse::new("Recipe updated")))
    } else {
        Err(ApiError::NotFound("Recipe not found".to_string()))
    }
}

/// DELETE /user/{user_id}/recipes/{recipe_id} - Delete a saved recipe
#[utoipa::path(
    delete,
    path = "/user/{user_id}/recipes/{recipe_id}",
    tag = "Recipes",
    params(
        ("user_id" = String, Path, description = "User identifier"),
        ("recipe_id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 404, description = "Recipe not found for this user", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(recipes): State<RecipeRepository>,
    Path((user_id, recipe_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    if recipes.delete_recipe(&user_id, &recipe_id).await? {
        info!("Deleted recipe {} for user {}", recipe_id, user_id);
        Ok(Json(MessageResponse::new("Recipe deleted successfully")))
    } else {
        Err(ApiError::NotFound("Recipe not found".to_string()))
    }
}

// `full` is a reserved segment, never a recipe id
async fn recipe_not_found() -> ApiError {
    ApiError::NotFound("Recipe not found".to_string())
}
