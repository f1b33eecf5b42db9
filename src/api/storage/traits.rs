//! Storage trait definitions for the API storage backends.

use crate::models::{Dish, DishFields, NewDish, NewUserRecipe, RecipeFields, UserRecipe};
use std::fmt;
use uuid::Uuid;

/// The collections held by a storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Dishes,
    /// Reserved for user profiles; nothing writes to it yet.
    Users,
    UserRecipes,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Dishes => "dishes",
            Collection::Users => "users",
            Collection::UserRecipes => "user_recipes",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage backend trait for document operations.
///
/// One instance is shared by every request, so implementations must be safe
/// for concurrent use.
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync {
    /// Distinct countries present in the dish collection, in no particular order
    async fn distinct_countries(&self) -> Result<Vec<String>, super::StorageError>;

    /// Pick one dish at random among those whose country matches exactly
    async fn sample_dish_by_country(
        &self,
        country: &str,
    ) -> Result<Option<Dish>, super::StorageError>;

    /// Get dish by ID
    async fn find_dish(&self, id: Uuid) -> Result<Option<Dish>, super::StorageError>;

    /// Insert a dish and return its store-assigned ID
    async fn insert_dish(&self, dish: NewDish) -> Result<Uuid, super::StorageError>;

    /// Insert many dishes at once
    async fn insert_dishes(&self, dishes: Vec<NewDish>) -> Result<Vec<Uuid>, super::StorageError>;

    /// Overwrite the present fields of a dish.
    ///
    /// Returns `true` only when a stored value actually changed, so a missing
    /// dish and a no-op update both yield `false`.
    async fn update_dish(&self, id: Uuid, fields: &DishFields)
    -> Result<bool, super::StorageError>;

    /// Delete a dish, returning whether one was removed
    async fn delete_dish(&self, id: Uuid) -> Result<bool, super::StorageError>;

    /// IDs of every dish in insertion order
    async fn dish_ids(&self) -> Result<Vec<Uuid>, super::StorageError>;

    /// Find the recipe a user saved from a given dish
    async fn find_recipe_by_dish(
        &self,
        user_id: &str,
        dish_id: Uuid,
    ) -> Result<Option<UserRecipe>, super::StorageError>;

    /// Insert a recipe.
    ///
    /// Fails with `StorageError::Conflict` if the user already saved the dish.
    async fn insert_recipe(&self, recipe: NewUserRecipe) -> Result<Uuid, super::StorageError>;

    /// All recipes saved by a user
    async fn recipes_for_user(&self, user_id: &str)
    -> Result<Vec<UserRecipe>, super::StorageError>;

    /// IDs of the recipes saved by a user
    async fn recipe_ids_for_user(&self, user_id: &str) -> Result<Vec<Uuid>, super::StorageError>;

    /// Update a recipe owned by `user_id`, returning whether it matched
    async fn update_recipe(
        &self,
        user_id: &str,
        recipe_id: Uuid,
        fields: &RecipeFields,
    ) -> Result<bool, super::StorageError>;

    /// Delete a recipe owned by `user_id`, returning whether one was removed
    async fn delete_recipe(
        &self,
        user_id: &str,
        recipe_id: Uuid,
    ) -> Result<bool, super::StorageError>;

    /// Number of documents in a collection
    async fn count(&self, collection: Collection) -> Result<u64, super::StorageError>;

    /// Remove every document from a collection, returning how many were removed
    async fn clear(&self, collection: Collection) -> Result<u64, super::StorageError>;

    /// Round-trip to the backing store
    async fn health_check(&self) -> Result<(), super::StorageError>;

    fn backend_name(&self) -> &'static str;
}
