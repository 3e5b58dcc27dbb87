use std::collections::HashSet;

use serde::Serialize;

use crate::models::Recipe;
use crate::services::normalize::normalized_names;

/// Ingredient coverage for one recipe against the on-hand set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchScore {
    /// Count of recipe ingredients present in the on-hand set
    pub matches: usize,
    /// Count of (normalized) recipe ingredients
    pub total: usize,
    /// matches / max(total, 1), in [0, 1]
    pub coverage: f64,
    /// Recipe ingredient names not on hand, original casing, recipe order
    pub missing: Vec<String>,
}

/// Scores a recipe against a set of lowercase on-hand ingredient names
///
/// Pure and deterministic. A recipe with no usable ingredients gets a
/// coverage of zero rather than dividing by zero.
pub fn score_match(recipe: &Recipe, on_hand: &HashSet<String>) -> MatchScore {
    let names = normalized_names(&recipe.ingredients);
    let total = names.len();
    let matches = names.iter().filter(|name| on_hand.contains(*name)).count();
    let coverage = matches as f64 / total.max(1) as f64;

    // Pair normalized names back with original casing for the missing list.
    let missing = recipe
        .ingredients
        .iter()
        .filter_map(|ingredient| {
            let name = ingredient.name().trim().to_lowercase();
            if name.is_empty() || on_hand.contains(&name) {
                None
            } else {
                Some(ingredient.name().to_string())
            }
        })
        .collect();

    MatchScore {
        matches,
        total,
        coverage,
        missing,
    }
}

/// Builds the lowercase on-hand lookup set from user-entered names
pub fn on_hand_set(ingredients: &[String]) -> HashSet<String> {
    ingredients.iter().map(|s| s.trim().to_lowercase()).collect()
}
