//! Errors raised by the repositories and the seed loader.

use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied an unusable payload
    #[error("{0}")]
    InvalidInput(String),
    /// A recipe was saved from a dish that does not exist
    #[error("Dish not found: {0}")]
    DishNotFound(String),
    /// The user already saved this dish
    #[error("Recipe already saved: user {user_id} has dish {dish_id}")]
    AlreadySaved { user_id: String, dish_id: String },
    /// The reference catalog could not be loaded
    #[error("Seed catalog error: {0}")]
    Catalog(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
