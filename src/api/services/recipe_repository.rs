//! Saved recipes: per-user snapshots of dishes.

use super::{ServiceError, parse_id};
use crate::models::{NewUserRecipe, RecipeFields, UserRecipe};
use crate::storage::{StorageBackend, StorageError};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct RecipeRepository {
    storage: Arc<dyn StorageBackend>,
}

impl RecipeRepository {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Save a snapshot of `dish_id` for `user_id`.
    ///
    /// Fails with `DishNotFound` when the dish is missing (or the id is
    /// malformed) and with `AlreadySaved` when the user already has it. The
    /// store's uniqueness constraint backs up the pre-check, so two concurrent
    /// saves of the same pair cannot both succeed.
    pub async fn save_recipe(
        &self,
        user_id: &str,
        dish_id: &str,
        custom_name: Option<String>,
    ) -> Result<Uuid, ServiceError> {
        let dish = match parse_id(dish_id) {
            Some(id) => self.storage.find_dish(id).await?,
            None => None,
        };
        let Some(dish) = dish else {
            return Err(ServiceError::DishNotFound(dish_id.to_string()));
        };

        let already_saved = || ServiceError::AlreadySaved {
            user_id: user_id.to_string(),
            dish_id: dish_id.to_string(),
        };

        if self
            .storage
            .find_recipe_by_dish(user_id, dish.id)
            .await?
            .is_some()
        {
            return Err(already_saved());
        }

        match self
            .storage
            .insert_recipe(NewUserRecipe::snapshot(user_id, &dish, custom_name))
            .await
        {
            Ok(id) => Ok(id),
            Err(StorageError::Conflict { message, .. }) => {
                debug!("Concurrent save rejected by store: {}", message);
                Err(already_saved())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_recipes(&self, user_id: &str) -> Result<Vec<UserRecipe>, ServiceError> {
        Ok(self.storage.recipes_for_user(user_id).await?)
    }

    pub async fn list_recipe_ids(&self, user_id: &str) -> Result<Vec<Uuid>, ServiceError> {
        Ok(self.storage.recipe_ids_for_user(user_id).await?)
    }

    /// Update a recipe the user owns. Returns whether it was found.
    pub async fn update_recipe(
        &self,
        user_id: &str,
        recipe_id: &str,
        fields: &RecipeFields,
    ) -> Result<bool, ServiceError> {
        if fields.is_empty() {
            return Err(ServiceError::InvalidInput(
                "No recipe fields to update".to_string(),
            ));
        }
        let Some(recipe_id) = parse_id(recipe_id) else {
            return Ok(false);
        };
        Ok(self
            .storage
            .update_recipe(user_id, recipe_id, fields)
            .await?)
    }

    /// Delete a recipe the user owns. Another user's recipe is never touched.
    pub async fn delete_recipe(&self, user_id: &str, recipe_id: &str) -> Result<bool, ServiceError> {
        let Some(recipe_id) = parse_id(recipe_id) else {
            return Ok(false);
        };
        Ok(self.storage.delete_recipe(user_id, recipe_id).await?)
    }
}
