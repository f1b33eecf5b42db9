// Models module - contains Dish, UserRecipe and seed statistics

pub mod dish;
pub mod recipe;
pub mod seed;

pub use dish::{Dish, DishFields, NewDish};
pub use recipe::{NewUserRecipe, RecipeFields, UserRecipe};
pub use seed::SeedStatistics;
