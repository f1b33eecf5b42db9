//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod dishes;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod recipes;
pub mod response;
pub mod seed;
pub mod system;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use app_state::AppState;

use crate::services::{SeedCatalog, ServiceError};
use crate::storage::StorageBackend;

/// Create the API router combining all route modules
///
/// State is applied by callers (see [`create_app`]), so tests can build the
/// router around any storage backend.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(system::system_router())
        .merge(dishes::dishes_router())
        .merge(recipes::recipes_router())
        .merge(seed::seed_router())
        .merge(openapi::openapi_router())
}

/// Build application state around a storage backend and the bundled catalog.
pub fn create_app_state(
    storage: Arc<dyn StorageBackend>,
    static_dir: PathBuf,
) -> Result<AppState, ServiceError> {
    let catalog = Arc::new(SeedCatalog::reference()?);
    Ok(AppState::new(storage, catalog, static_dir))
}

/// Assemble the full application: routes, `/static` file serving, request
/// tracing and CORS.
pub fn create_app(app_state: AppState, cors: CorsLayer) -> Router {
    let static_files = ServeDir::new(&app_state.static_dir).append_index_html_on_directories(false);

    create_api_router()
        .nest_service("/static", static_files)
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
