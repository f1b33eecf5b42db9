use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A reference recipe belonging to a country.
///
/// Every field except `id` may be missing on records created through the API,
/// since dish creation only requires a non-empty payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Caller-supplied identifier from `POST /dish/{id}`. Informational only,
    /// lookups always use `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
}

impl Dish {
    pub fn new(id: Uuid, dish: NewDish) -> Self {
        let NewDish { fields, custom_id } = dish;
        Self {
            id,
            name: fields.name,
            country: fields.country,
            ingredients: fields.ingredients.unwrap_or_default(),
            instructions: fields.instructions,
            custom_id,
        }
    }
}

/// Field set accepted when creating or updating a dish.
///
/// Absent fields are left untouched on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DishFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl DishFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.country.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
    }

    /// Overwrite the present fields on `dish`. Returns whether anything changed.
    pub fn apply_to(&self, dish: &mut Dish) -> bool {
        let mut changed = false;
        if let Some(name) = &self.name {
            changed |= replace(&mut dish.name, name);
        }
        if let Some(country) = &self.country {
            changed |= replace(&mut dish.country, country);
        }
        if let Some(ingredients) = &self.ingredients {
            if &dish.ingredients != ingredients {
                dish.ingredients = ingredients.clone();
                changed = true;
            }
        }
        if let Some(instructions) = &self.instructions {
            changed |= replace(&mut dish.instructions, instructions);
        }
        changed
    }
}

fn replace(slot: &mut Option<String>, value: &str) -> bool {
    if slot.as_deref() == Some(value) {
        return false;
    }
    *slot = Some(value.to_string());
    true
}

/// A dish about to be inserted; the store assigns its id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewDish {
    pub fields: DishFields,
    pub custom_id: Option<String>,
}

impl From<DishFields> for NewDish {
    fn from(fields: DishFields) -> Self {
        Self {
            fields,
            custom_id: None,
        }
    }
}
