use std::collections::HashSet;

use crate::models::{Filters, Recipe};
use crate::services::matching::{score_match, MatchScore};

/// A recipe that survived filtering, with its coverage score
#[derive(Debug, Clone)]
pub struct RankedRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: MatchScore,
}

/// Decides whether a recipe passes the active filters
///
/// All predicates must hold: time limit (unset or zero means no limit),
/// difficulty selector, and diet labels. An active diet filter excludes
/// recipes that declare no diet labels at all.
pub fn passes_filters(recipe: &Recipe, filters: &Filters) -> bool {
    let within_time = match filters.max_time {
        Some(limit) if limit > 0 => recipe.time <= limit,
        _ => true,
    };

    let difficulty_ok = filters.difficulty.matches(recipe.difficulty);

    let diet_ok = if filters.diets.is_empty() {
        true
    } else {
        recipe
            .diets
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|diet| filters.diets.contains(diet))
    };

    within_time && difficulty_ok && diet_ok
}

/// Filters and ranks the recipe collection against the on-hand set
///
/// Survivors are sorted by descending coverage. The sort is stable, so
/// recipes with equal coverage keep their original collection order.
/// Recomputed from scratch on every request; no incremental state.
pub fn rank<'a>(
    recipes: &'a [Recipe],
    filters: &Filters,
    on_hand: &HashSet<String>,
) -> Vec<RankedRecipe<'a>> {
    let mut ranked: Vec<RankedRecipe<'a>> = recipes
        .iter()
        .filter(|recipe| passes_filters(recipe, filters))
        .map(|recipe| RankedRecipe {
            score: score_match(recipe, on_hand),
            recipe,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .coverage
            .partial_cmp(&a.score.coverage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}
