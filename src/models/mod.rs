pub mod filters;
pub mod recipe;

pub use filters::{DifficultyFilter, Filters};
pub use recipe::{Difficulty, Ingredient, IngredientDetail, Nutrients, Recipe};
