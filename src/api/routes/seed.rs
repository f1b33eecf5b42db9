//! Seed routes: load the reference catalog and describe it.

use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use tracing::info;

use super::app_state::AppState;
use super::error::{ApiError, ErrorResponse};
use super::response::MessageResponse;
use crate::models::SeedStatistics;
use crate::services::SeedLoader;

/// Create the seed router
pub fn seed_router() -> Router<AppState> {
    Router::new()
        .route("/seed", post(seed))
        .route("/force-seed", post(force_seed))
        .route("/seed-info", get(seed_info))
}

/// POST /seed - Load the catalog unless dishes already exist
#[utoipa::path(
    post,
    path = "/seed",
    tag = "Seed",
    responses(
        (status = 200, description = "Seed outcome message", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn seed(State(seeder): State<SeedLoader>) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = seeder.seed(false).await?;
    Ok(Json(MessageResponse::new(outcome.to_string())))
}

/// POST /force-seed - Drop all dishes and saved recipes, then load the catalog
#[utoipa::path(
    post,
    path = "/force-seed",
    tag = "Seed",
    responses(
        (status = 200, description = "Seed outcome message", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn force_seed(
    State(seeder): State<SeedLoader>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Force seed requested");
    let outcome = seeder.seed(true).await?;
    Ok(Json(MessageResponse::new(outcome.to_string())))
}

/// GET /seed-info - Statistics of the reference catalog
#[utoipa::path(
    get,
    path = "/seed-info",
    tag = "Seed",
    responses(
        (status = 200, description = "Catalog statistics", body = SeedStatistics),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn seed_info(State(seeder): State<SeedLoader>) -> Json<SeedStatistics> {
    Json(seeder.statistics())
}
