//! PostgreSQL storage backend implementation.
//!
//! Uses sqlx for database operations and implements the StorageBackend trait.
//! Each collection is a table; recipe snapshots live in a JSONB column so a
//! snapshot keeps whatever shape the dish had when it was saved.

use super::{StorageError, traits::*};
use crate::models::{Dish, DishFields, NewDish, NewUserRecipe, RecipeFields, UserRecipe};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const DISH_COLUMNS: &str = "id, custom_id, name, country, ingredients, instructions";
const RECIPE_COLUMNS: &str = "id, user_id, dish_id, custom_name, original_dish, saved_at";
const RECIPE_PAIR_CONSTRAINT: &str = "user_recipes_user_dish_unique";

#[derive(sqlx::FromRow)]
struct DishRow {
    id: Uuid,
    custom_id: Option<String>,
    name: Option<String>,
    country: Option<String>,
    ingredients: Vec<String>,
    instructions: Option<String>,
}

impl From<DishRow> for Dish {
    fn from(row: DishRow) -> Self {
        Dish {
            id: row.id,
            name: row.name,
            country: row.country,
            ingredients: row.ingredients,
            instructions: row.instructions,
            custom_id: row.custom_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: Uuid,
    user_id: String,
    dish_id: Uuid,
    custom_name: String,
    original_dish: Json<Dish>,
    saved_at: DateTime<Utc>,
}

impl From<RecipeRow> for UserRecipe {
    fn from(row: RecipeRow) -> Self {
        UserRecipe {
            id: row.id,
            user_id: row.user_id,
            dish_id: row.dish_id,
            custom_name: row.custom_name,
            original_dish: row.original_dish.0,
            saved_at: row.saved_at,
        }
    }
}

fn db_error(e: sqlx::Error) -> StorageError {
    StorageError::Query(e.to_string())
}

/// PostgreSQL storage backend implementation.
pub struct PostgresStorageBackend {
    pool: PgPool,
}

impl PostgresStorageBackend {
    /// Create a new PostgreSQL storage backend.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::Migration(e.to_string()))
    }
}

#[async_trait]
impl StorageBackend for PostgresStorageBackend {
    async fn distinct_countries(&self) -> Result<Vec<String>, StorageError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT country
            FROM dishes
            WHERE country IS NOT NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)
    }

    async fn sample_dish_by_country(&self, country: &str) -> Result<Option<Dish>, StorageError> {
        let sql = format!(
            "SELECT {DISH_COLUMNS} FROM dishes WHERE country = $1 ORDER BY random() LIMIT 1"
        );
        let row = sqlx::query_as::<_, DishRow>(&sql)
            .bind(country)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.map(Dish::from))
    }

    async fn find_dish(&self, id: Uuid) -> Result<Option<Dish>, StorageError> {
        let sql = format!("SELECT {DISH_COLUMNS} FROM dishes WHERE id = $1");
        let row = sqlx::query_as::<_, DishRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.map(Dish::from))
    }

    async fn insert_dish(&self, dish: NewDish) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        let NewDish { fields, custom_id } = dish;

        sqlx::query(
            r#"
            INSERT INTO dishes (id, custom_id, name, country, ingredients, instructions)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(custom_id)
        .bind(fields.name)
        .bind(fields.country)
        .bind(fields.ingredients.unwrap_or_default())
        .bind(fields.instructions)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(id)
    }

    async fn insert_dishes(&self, dishes: Vec<NewDish>) -> Result<Vec<Uuid>, StorageError> {
        if dishes.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = dishes.iter().map(|_| Uuid::new_v4()).collect();
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO dishes (id, custom_id, name, country, ingredients, instructions) ",
        );
        builder.push_values(ids.iter().zip(dishes), |mut row, (id, dish)| {
            let NewDish { fields, custom_id } = dish;
            row.push_bind(*id)
                .push_bind(custom_id)
                .push_bind(fields.name)
                .push_bind(fields.country)
                .push_bind(fields.ingredients.unwrap_or_default())
                .push_bind(fields.instructions);
        });

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(ids)
    }

    async fn update_dish(&self, id: Uuid, fields: &DishFields) -> Result<bool, StorageError> {
        // The IS DISTINCT FROM guard keeps no-op updates from counting as modified.
        let rows_affected = sqlx::query(
            r#"
            UPDATE dishes
            SET name = COALESCE($2, name),
                country = COALESCE($3, country),
                ingredients = COALESCE($4, ingredients),
                instructions = COALESCE($5, instructions)
            WHERE id = $1
              AND (name IS DISTINCT FROM COALESCE($2, name)
                OR country IS DISTINCT FROM COALESCE($3, country)
                OR ingredients IS DISTINCT FROM COALESCE($4, ingredients)
                OR instructions IS DISTINCT FROM COALESCE($5, instructions))
            "#,
        )
        .bind(id)
        .bind(fields.name.as_deref())
        .bind(fields.country.as_deref())
        .bind(fields.ingredients.as_deref())
        .bind(fields.instructions.as_deref())
        .execute(&self.pool)
        .await
        .map_err(db_error)?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn delete_dish(&self, id: Uuid) -> Result<bool, StorageError> {
        let rows_affected = sqlx::query("DELETE FROM dishes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn dish_ids(&self) -> Result<Vec<Uuid>, StorageError> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM dishes ORDER BY seq")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)
    }

    async fn find_recipe_by_dish(
        &self,
        user_id: &str,
        dish_id: Uuid,
    ) -> Result<Option<UserRecipe>, StorageError> {
        let sql = format!(
            "SELECT {RECIPE_COLUMNS} FROM user_recipes WHERE user_id = $1 AND dish_id = $2"
        );
        let row = sqlx::query_as::<_, RecipeRow>(&sql)
            .bind(user_id)
            .bind(dish_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(row.map(UserRecipe::from))
    }

    async fn insert_recipe(&self, recipe: NewUserRecipe) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();

        let result = sqlx::query(
            r#"
            INSERT INTO user_recipes (id, user_id, dish_id, custom_name, original_dish, saved_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(&recipe.user_id)
        .bind(recipe.dish_id)
        .bind(&recipe.custom_name)
        .bind(Json(&recipe.original_dish))
        .bind(recipe.saved_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(id),
            Err(sqlx::Error::Database(e))
                if e.is_unique_violation() && e.constraint() == Some(RECIPE_PAIR_CONSTRAINT) =>
            {
                Err(StorageError::Conflict {
                    collection: Collection::UserRecipes,
                    message: format!(
                        "user {} already saved dish {}",
                        recipe.user_id, recipe.dish_id
                    ),
                })
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn recipes_for_user(&self, user_id: &str) -> Result<Vec<UserRecipe>, StorageError> {
        let sql =
            format!("SELECT {RECIPE_COLUMNS} FROM user_recipes WHERE user_id = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, RecipeRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(UserRecipe::from).collect())
    }

    async fn recipe_ids_for_user(&self, user_id: &str) -> Result<Vec<Uuid>, StorageError> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM user_recipes WHERE user_id = $1 ORDER BY seq",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)
    }

    async fn update_recipe(
        &self,
        user_id: &str,
        recipe_id: Uuid,
        fields: &RecipeFields,
    ) -> Result<bool, StorageError> {
        // `||` merges the present snapshot fields over the stored JSONB object.
        let rows_affected = sqlx::query(
            r#"
            UPDATE user_recipes
            SET custom_name = COALESCE($3, custom_name),
                original_dish = original_dish || $4
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(recipe_id)
        .bind(user_id)
        .bind(fields.custom_name.as_deref())
        .bind(Json(fields.snapshot_patch()))
        .execute(&self.pool)
        .await
        .map_err(db_error)?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn delete_recipe(&self, user_id: &str, recipe_id: Uuid) -> Result<bool, StorageError> {
        let rows_affected = sqlx::query("DELETE FROM user_recipes WHERE id = $1 AND user_id = $2")
            .bind(recipe_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    async fn count(&self, collection: Collection) -> Result<u64, StorageError> {
        let sql = format!("SELECT COUNT(*) FROM {}", collection.name());
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(count.max(0) as u64)
    }

    async fn clear(&self, collection: Collection) -> Result<u64, StorageError> {
        let sql = format!("DELETE FROM {}", collection.name());
        let rows_affected = sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(db_error)?
            .rows_affected();

        Ok(rows_affected)
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
