//! In-memory storage backend.
//!
//! Holds every collection in a `Vec` guarded by a `tokio::sync::RwLock`. Used
//! when no `DATABASE_URL` is configured and as the storage double in tests.
//!
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: mutations take the write lock of the
//!   collection they touch, so the duplicate check in `insert_recipe` and the
//!   insert itself cannot interleave with another save.
//! - Lookups scan the collection; fine for the catalog sizes this serves.

use super::{StorageError, traits::*};
use crate::models::{Dish, DishFields, NewDish, NewUserRecipe, RecipeFields, UserRecipe};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory storage backend.
#[derive(Default)]
pub struct InMemoryStorageBackend {
    dishes: RwLock<Vec<Dish>>,
    /// Reserved for user profiles, only counted and cleared.
    users: RwLock<Vec<String>>,
    recipes: RwLock<Vec<UserRecipe>>,
}

impl InMemoryStorageBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorageBackend {
    async fn distinct_countries(&self) -> Result<Vec<String>, StorageError> {
        let dishes = self.dishes.read().await;
        let countries: BTreeSet<&String> = dishes.iter().filter_map(|d| d.country.as_ref()).collect();
        Ok(countries.into_iter().cloned().collect())
    }

    async fn sample_dish_by_country(&self, country: &str) -> Result<Option<Dish>, StorageError> {
        let dishes = self.dishes.read().await;
        let matching: Vec<&Dish> = dishes
            .iter()
            .filter(|d| d.country.as_deref() == Some(country))
            .collect();
        Ok(matching.choose(&mut rand::rng()).map(|d| (*d).clone()))
    }

    async fn find_dish(&self, id: Uuid) -> Result<Option<Dish>, StorageError> {
        let dishes = self.dishes.read().await;
        Ok(dishes.iter().find(|d| d.id == id).cloned())
    }

    async fn insert_dish(&self, dish: NewDish) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        self.dishes.write().await.push(Dish::new(id, dish));
        Ok(id)
    }

    async fn insert_dishes(&self, dishes: Vec<NewDish>) -> Result<Vec<Uuid>, StorageError> {
        let mut stored = self.dishes.write().await;
        let ids = dishes
            .into_iter()
            .map(|dish| {
                let id = Uuid::new_v4();
                stored.push(Dish::new(id, dish));
                id
            })
            .collect();
        Ok(ids)
    }

    async fn update_dish(&self, id: Uuid, fields: &DishFields) -> Result<bool, StorageError> {
        let mut dishes = self.dishes.write().await;
        Ok(dishes
            .iter_mut()
            .find(|d| d.id == id)
            .is_some_and(|dish| fields.apply_to(dish)))
    }

    async fn delete_dish(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut dishes = self.dishes.write().await;
        let before = dishes.len();
        dishes.retain(|d| d.id != id);
        Ok(dishes.len() < before)
    }

    async fn dish_ids(&self) -> Result<Vec<Uuid>, StorageError> {
        Ok(self.dishes.read().await.iter().map(|d| d.id).collect())
    }

    async fn find_recipe_by_dish(
        &self,
        user_id: &str,
        dish_id: Uuid,
    ) -> Result<Option<UserRecipe>, StorageError> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .find(|r| r.user_id == user_id && r.dish_id == dish_id)
            .cloned())
    }

    async fn insert_recipe(&self, recipe: NewUserRecipe) -> Result<Uuid, StorageError> {
        let mut recipes = self.recipes.write().await;
        if recipes
            .iter()
            .any(|r| r.user_id == recipe.user_id && r.dish_id == recipe.dish_id)
        {
            return Err(StorageError::Conflict {
                collection: Collection::UserRecipes,
                message: format!(
                    "user {} already saved dish {}",
                    recipe.user_id, recipe.dish_id
                ),
            });
        }

        let id = Uuid::new_v4();
        recipes.push(UserRecipe {
            id,
            user_id: recipe.user_id,
            dish_id: recipe.dish_id,
            custom_name: recipe.custom_name,
            original_dish: recipe.original_dish,
            saved_at: recipe.saved_at,
        });
        Ok(id)
    }

    async fn recipes_for_user(&self, user_id: &str) -> Result<Vec<UserRecipe>, StorageError> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn recipe_ids_for_user(&self, user_id: &str) -> Result<Vec<Uuid>, StorageError> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| r.id)
            .collect())
    }

    async fn update_recipe(
        &self,
        user_id: &str,
        recipe_id: Uuid,
        fields: &RecipeFields,
    ) -> Result<bool, StorageError> {
        let mut recipes = self.recipes.write().await;
        match recipes
            .iter_mut()
            .find(|r| r.id == recipe_id && r.user_id == user_id)
        {
            Some(recipe) => {
                fields.apply_to(recipe);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_recipe(&self, user_id: &str, recipe_id: Uuid) -> Result<bool, StorageError> {
        let mut recipes = self.recipes.write().await;
        let before = recipes.len();
        recipes.retain(|r| !(r.id == recipe_id && r.user_id == user_id));
        Ok(recipes.len() < before)
    }

    async fn count(&self, collection: Collection) -> Result<u64, StorageError> {
        let count = match collection {
            Collection::Dishes => self.dishes.read().await.len(),
            Collection::Users => self.users.read().await.len(),
            Collection::UserRecipes => self.recipes.read().await.len(),
        };
        Ok(count as u64)
    }

    async fn clear(&self, collection: Collection) -> Result<u64, StorageError> {
        let removed = match collection {
            Collection::Dishes => self.dishes.write().await.drain(..).count(),
            Collection::Users => self.users.write().await.drain(..).count(),
            Collection::UserRecipes => self.recipes.write().await.drain(..).count(),
        };
        Ok(removed as u64)
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
