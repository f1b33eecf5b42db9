//! Application state management.
//!
//! Defines the AppState struct that holds the repositories, all built on one
//! shared storage backend.

use crate::services::{DishRepository, RecipeRepository, SeedCatalog, SeedLoader};
use crate::storage::StorageBackend;
use axum::extract::FromRef;
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishRepository,
    pub recipes: RecipeRepository,
    pub seeder: SeedLoader,
    /// Directory holding the landing page
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create application state around a single storage backend instance.
    pub fn new(
        storage: Arc<dyn StorageBackend>,
        catalog: Arc<SeedCatalog>,
        static_dir: PathBuf,
    ) -> Self {
        Self {
            dishes: DishRepository::new(storage.clone()),
            recipes: RecipeRepository::new(storage.clone()),
            seeder: SeedLoader::new(storage, catalog),
            static_dir,
        }
    }
}

// Allow handlers to extract individual parts of the state (for Axum)
impl FromRef<AppState> for DishRepository {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.dishes.clone()
    }
}

impl FromRef<AppState> for RecipeRepository {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.recipes.clone()
    }
}

impl FromRef<AppState> for SeedLoader {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.seeder.clone()
    }
}
