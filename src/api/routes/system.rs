//! Liveness, metrics and landing page routes.

use axum::{
    Router,
    extract::State,
    response::{Html, Json},
    routing::get,
};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::app_state::AppState;
use super::error::{ApiError, ErrorResponse};
use crate::services::DishRepository;

/// Create the system router
pub fn system_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Dish and country totals
#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsResponse {
    pub total_dishes: u64,
    pub total_countries: usize,
    pub status: String,
}

/// GET / - Serve the landing page from the static directory
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            error!("Error serving index page {}: {}", path.display(), e);
            Err(ApiError::Internal("index.html not found".to_string()))
        }
    }
}

/// GET /health - Liveness check; never touches the store
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "GeoDish API is running".to_string(),
    })
}

/// GET /metrics - Dish and country totals
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "System",
    responses(
        (status = 200, description = "Current totals", body = MetricsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn metrics(
    State(dishes): State<DishRepository>,
) -> Result<Json<MetricsResponse>, ApiError> {
    let total_dishes = dishes.count_dishes().await?;
    let total_countries = dishes.list_countries().await?.len();
    info!(
        "Metrics: {} dishes across {} countries",
        total_dishes, total_countries
    );
    Ok(Json(MetricsResponse {
        total_dishes,
        total_countries,
        status: "healthy".to_string(),
    }))
}
