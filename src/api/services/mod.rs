//! Services module - repositories over the storage backend and the seed loader.

pub mod dish_repository;
pub mod error;
pub mod recipe_repository;
pub mod seed_catalog;
pub mod seed_loader;

// Re-export for convenience
pub use dish_repository::DishRepository;
pub use error::ServiceError;
pub use recipe_repository::RecipeRepository;
pub use seed_catalog::{SeedCatalog, SeedDish};
pub use seed_loader::{SeedLoader, SeedOutcome};

use uuid::Uuid;

/// Parse a caller-supplied document id. Anything that is not a store id
/// yields `None` so callers can treat it as "not found".
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}
