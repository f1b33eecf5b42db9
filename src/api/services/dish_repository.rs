//! Dish queries and CRUD over the dishes collection.

use super::{ServiceError, parse_id};
use crate::models::{Dish, DishFields, NewDish};
use crate::storage::{Collection, StorageBackend};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct DishRepository {
    storage: Arc<dyn StorageBackend>,
}

impl DishRepository {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Sorted, duplicate-free country names.
    pub async fn list_countries(&self) -> Result<Vec<String>, ServiceError> {
        let mut countries = self.storage.distinct_countries().await?;
        countries.sort();
        countries.dedup();
        Ok(countries)
    }

    pub async fn random_dish_by_country(&self, country: &str) -> Result<Option<Dish>, ServiceError> {
        Ok(self.storage.sample_dish_by_country(country).await?)
    }

    /// Look up a dish. A malformed id is the same as a missing dish.
    pub async fn dish_by_id(&self, id: &str) -> Result<Option<Dish>, ServiceError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        Ok(self.storage.find_dish(id).await?)
    }

    /// Insert a dish. Only an empty field set is rejected.
    pub async fn create_dish(
        &self,
        fields: DishFields,
        custom_id: Option<String>,
    ) -> Result<Uuid, ServiceError> {
        if fields.is_empty() {
            return Err(ServiceError::InvalidInput(
                "Dish data is required".to_string(),
            ));
        }
        Ok(self
            .storage
            .insert_dish(NewDish { fields, custom_id })
            .await?)
    }

    /// Returns whether the dish was modified; a missing dish and a no-op
    /// update are both `false`.
    pub async fn update_dish(&self, id: &str, fields: &DishFields) -> Result<bool, ServiceError> {
        if fields.is_empty() {
            return Err(ServiceError::InvalidInput(
                "No dish fields to update".to_string(),
            ));
        }
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        Ok(self.storage.update_dish(id, fields).await?)
    }

    pub async fn delete_dish(&self, id: &str) -> Result<bool, ServiceError> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        Ok(self.storage.delete_dish(id).await?)
    }

    pub async fn all_dish_ids(&self) -> Result<Vec<Uuid>, ServiceError> {
        Ok(self.storage.dish_ids().await?)
    }

    pub async fn count_dishes(&self) -> Result<u64, ServiceError> {
        Ok(self.storage.count(Collection::Dishes).await?)
    }
}
