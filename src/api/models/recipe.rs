use super::dish::{Dish, DishFields};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's saved copy of a dish.
///
/// `original_dish` is a snapshot taken at save time, so later edits or deletes
/// of the source dish leave the recipe alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRecipe {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: String,
    pub dish_id: Uuid,
    pub custom_name: String,
    pub original_dish: Dish,
    pub saved_at: DateTime<Utc>,
}

/// A recipe about to be inserted; the store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRecipe {
    pub user_id: String,
    pub dish_id: Uuid,
    pub custom_name: String,
    pub original_dish: Dish,
    pub saved_at: DateTime<Utc>,
}

impl NewUserRecipe {
    /// Snapshot `dish` for `user_id`, falling back to the dish name when no
    /// custom name is given.
    pub fn snapshot(user_id: &str, dish: &Dish, custom_name: Option<String>) -> Self {
        let custom_name = custom_name
            .filter(|name| !name.is_empty())
            .or_else(|| dish.name.clone())
            .unwrap_or_default();

        Self {
            user_id: user_id.to_string(),
            dish_id: dish.id,
            custom_name,
            original_dish: dish.clone(),
            saved_at: Utc::now(),
        }
    }
}

/// Field set accepted when updating a saved recipe.
///
/// `custom_name` renames the recipe; the remaining fields edit the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RecipeFields {
    #[serde(default, alias = "customname", skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl RecipeFields {
    pub fn is_empty(&self) -> bool {
        self.custom_name.is_none() && self.snapshot_patch().is_empty()
    }

    pub fn snapshot_patch(&self) -> DishFields {
        DishFields {
            name: self.name.clone(),
            country: self.country.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }

    pub fn apply_to(&self, recipe: &mut UserRecipe) {
        if let Some(custom_name) = &self.custom_name {
            recipe.custom_name = custom_name.clone();
        }
        self.snapshot_patch().apply_to(&mut recipe.original_dish);
    }
}
