use std::path::Path;

use anyhow::Context;

use crate::models::Recipe;

/// Loads the static recipe dataset from a JSON file
///
/// Each array element is deserialized individually so one malformed record
/// is skipped with a warning instead of failing the whole load.
pub fn load_recipes(path: &Path) -> anyhow::Result<Vec<Recipe>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe dataset at {}", path.display()))?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("Recipe dataset at {} is not a JSON array", path.display()))?;

    let mut recipes = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<Recipe>(value) {
            Ok(recipe) => recipes.push(recipe),
            Err(e) => tracing::warn!(error = %e, "Skipping malformed recipe record"),
        }
    }

    tracing::info!(
        count = recipes.len(),
        path = %path.display(),
        "Recipe dataset loaded"
    );
    Ok(recipes)
}
