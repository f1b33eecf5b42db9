//! The reference dish catalog loaded by the seed loader.
//!
//! The catalog ships as `data/seed_dishes.json` and is compiled into the binary.

use super::ServiceError;
use crate::models::{DishFields, NewDish, SeedStatistics};
use serde::Deserialize;
use std::collections::BTreeSet;

const REFERENCE_CATALOG: &str = include_str!("../../../data/seed_dishes.json");

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedDish {
    pub name: String,
    pub country: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl From<&SeedDish> for NewDish {
    fn from(dish: &SeedDish) -> Self {
        NewDish::from(DishFields {
            name: Some(dish.name.clone()),
            country: Some(dish.country.clone()),
            ingredients: Some(dish.ingredients.clone()),
            instructions: Some(dish.instructions.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedCatalog {
    dishes: Vec<SeedDish>,
}

impl SeedCatalog {
    pub fn new(dishes: Vec<SeedDish>) -> Self {
        Self { dishes }
    }

    /// The catalog bundled with the binary.
    pub fn reference() -> Result<Self, ServiceError> {
        Self::from_json(REFERENCE_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| ServiceError::Catalog(e.to_string()))
    }

    pub fn dishes(&self) -> &[SeedDish] {
        &self.dishes
    }

    /// Sorted, duplicate-free countries in the catalog.
    pub fn countries(&self) -> Vec<String> {
        self.dishes
            .iter()
            .map(|d| d.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn country_count(&self) -> usize {
        self.countries().len()
    }

    pub fn dish_count(&self) -> usize {
        self.dishes.len()
    }

    pub fn statistics(&self) -> SeedStatistics {
        let countries = self.countries();
        let total_countries = countries.len();
        let total_dishes = self.dish_count();
        SeedStatistics {
            total_countries,
            total_dishes,
            dishes_per_country: total_dishes.checked_div(total_countries).unwrap_or(0),
            countries,
        }
    }
}
