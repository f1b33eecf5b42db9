//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Dishes
        crate::routes::dishes::list_countries,
        crate::routes::dishes::random_dish,
        crate::routes::dishes::get_dish,
        crate::routes::dishes::create_dish,
        crate::routes::dishes::update_dish,
        crate::routes::dishes::delete_dish,
        crate::routes::dishes::list_dish_ids,
        // Recipes
        crate::routes::recipes::save_dish,
        crate::routes::recipes::list_recipes,
        crate::routes::recipes::list_recipe_ids,
        crate::routes::recipes::update_recipe,
        crate::routes::recipes::delete_recipe,
        // Seed
        crate::routes::seed::seed,
        crate::routes::seed::force_seed,
        crate::routes::seed::seed_info,
        // System
        crate::routes::system::health,
        crate::routes::system::metrics,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::models::Dish,
        crate::models::DishFields,
        crate::models::UserRecipe,
        crate::models::RecipeFields,
        crate::models::SeedStatistics,
        crate::routes::error::ErrorResponse,
        crate::routes::dishes::DishCreatedResponse,
        crate::routes::response::MessageResponse,
        crate::routes::recipes::SaveRecipeRequest,
        crate::routes::recipes::SaveRecipeResponse,
        crate::routes::system::HealthResponse,
        crate::routes::system::MetricsResponse,
    )),
    modifiers(&VersionAddon),
    tags(
        (name = "Dishes", description = "Countries, random dishes and dish CRUD"),
        (name = "Recipes", description = "Per-user saved recipes"),
        (name = "Seed", description = "Reference catalog loading"),
        (name = "System", description = "Health and metrics"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "GeoDish API",
        description = "REST API for discovering dishes by country and keeping personal recipe collections",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    )
)]
pub struct ApiDoc;

struct VersionAddon;

impl Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // Update version to match Cargo.toml version
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
