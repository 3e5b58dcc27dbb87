use std::collections::HashMap;

use crate::models::Recipe;

/// How many recipes the recommendation panel surfaces at most
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Ratings at or above this count as a "liked" signal
pub const LIKE_RATING_THRESHOLD: u8 = 4;

/// A recommended recipe with its computed score
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
}

/// Builds a tag-affinity profile from the user's likes
///
/// Every recipe that is favorited or rated at or above the like threshold
/// contributes one count per tag. A recipe satisfying both conditions still
/// counts once.
pub fn preference_profile(
    recipes: &[Recipe],
    favorites: &[String],
    ratings: &HashMap<String, u8>,
) -> HashMap<String, u32> {
    let mut profile: HashMap<String, u32> = HashMap::new();
    for recipe in recipes {
        let liked = favorites.contains(&recipe.id)
            || ratings
                .get(&recipe.id)
                .is_some_and(|&rating| rating >= LIKE_RATING_THRESHOLD);
        if liked {
            for tag in &recipe.tags {
                *profile.entry(tag.clone()).or_insert(0) += 1;
            }
        }
    }
    profile
}

/// Scores and ranks recipes for the recommendation panel
///
/// score = tag-affinity sum + rating/5 baseline - 1 if already favorited.
/// The penalty demotes known favorites so the panel surfaces novel
/// suggestions; a favorite with enough affinity can still overcome it.
/// Only recipes with a strictly positive score are returned, at most
/// [`MAX_RECOMMENDATIONS`], ties keeping collection order.
pub fn recommend<'a>(
    recipes: &'a [Recipe],
    favorites: &[String],
    ratings: &HashMap<String, u8>,
) -> Vec<Recommendation<'a>> {
    let profile = preference_profile(recipes, favorites, ratings);

    let mut scored: Vec<Recommendation<'a>> = recipes
        .iter()
        .map(|recipe| {
            let tag_score: u32 = recipe
                .tags
                .iter()
                .filter_map(|tag| profile.get(tag))
                .sum();
            let baseline = ratings.get(&recipe.id).copied().unwrap_or(0) as f64 / 5.0;
            let penalty = if favorites.contains(&recipe.id) { -1.0 } else { 0.0 };
            Recommendation {
                recipe,
                score: tag_score as f64 + baseline + penalty,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
        .into_iter()
        .filter(|r| r.score > 0.0)
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Ingredient, Nutrients};

    fn recipe(id: &str, tags: Vec<&str>) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: id.to_string(),
            image: None,
            image_url: None,
            time: 20,
            difficulty: Difficulty::Easy,
            servings: 2,
            ingredients: vec![Ingredient::Name("Tomato".to_string())],
            steps: vec![],
            nutrition: Nutrients::default(),
            tags: tags.into_iter().map(String::from).collect(),
            diets: None,
        }
    }

    #[test]
    fn test_profile_counts_liked_recipes_once() {
        let recipes = vec![recipe("r1", vec!["italian", "pasta"])];
        let favorites = vec!["r1".to_string()];
        // Favorited and highly rated: still one count per tag
        let ratings = HashMap::from([("r1".to_string(), 5)]);
        let profile = preference_profile(&recipes, &favorites, &ratings);
        assert_eq!(profile.get("italian"), Some(&1));
        assert_eq!(profile.get("pasta"), Some(&1));
    }

    #[test]
    fn test_profile_ignores_unliked_recipes() {
        let recipes = vec![recipe("r1", vec!["mexican"]), recipe("r2", vec!["mexican"])];
        let ratings = HashMap::from([("r1".to_string(), 3)]);
        let profile = preference_profile(&recipes, &[], &ratings);
        assert!(profile.is_empty());
    }

    #[test]
    fn test_rating_threshold_counts_as_liked() {
        let recipes = vec![recipe("r1", vec!["asian"])];
        let ratings = HashMap::from([("r1".to_string(), 4)]);
        let profile = preference_profile(&recipes, &[], &ratings);
        assert_eq!(profile.get("asian"), Some(&1));
    }

    #[test]
    fn test_shared_tag_recommends_unseen_recipe() {
        let recipes = vec![
            recipe("liked", vec!["italian"]),
            recipe("novel", vec!["italian"]),
        ];
        let favorites = vec!["liked".to_string()];
        let ratings = HashMap::from([("liked".to_string(), 5)]);

        let recommended = recommend(&recipes, &favorites, &ratings);

        // novel: tag score 1, no baseline, no penalty
        let novel = recommended
            .iter()
            .find(|r| r.recipe.id == "novel")
            .expect("unseen recipe should be recommended");
        assert_eq!(novel.score, 1.0);

        // liked: tag score 1 + 5/5 baseline - 1 penalty = 1.0
        let liked = recommended.iter().find(|r| r.recipe.id == "liked").unwrap();
        assert_eq!(liked.score, 1.0 + 1.0 - 1.0);
    }

    #[test]
    fn test_penalty_can_exclude_favorites() {
        // Favorited, unrated, tag affinity 1: score = 1 - 1 = 0, filtered out
        let recipes = vec![recipe("fav", vec!["thai"])];
        let favorites = vec!["fav".to_string()];
        let recommended = recommend(&recipes, &favorites, &HashMap::new());
        assert!(recommended.is_empty());
    }

    #[test]
    fn test_scores_positive_and_capped() {
        let mut recipes: Vec<Recipe> = (0..10)
            .map(|i| recipe(&format!("r{i}"), vec!["comfort"]))
            .collect();
        recipes.push(recipe("liked", vec!["comfort"]));
        let favorites = vec!["liked".to_string()];

        let recommended = recommend(&recipes, &favorites, &HashMap::new());
        assert!(recommended.len() <= MAX_RECOMMENDATIONS);
        assert!(recommended.iter().all(|r| r.score > 0.0));

        // No duplicates
        let mut ids: Vec<&str> = recommended.iter().map(|r| r.recipe.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), recommended.len());
    }

    #[test]
    fn test_no_likes_yields_no_recommendations() {
        let recipes = vec![recipe("r1", vec!["italian"]), recipe("r2", vec!["pasta"])];
        assert!(recommend(&recipes, &[], &HashMap::new()).is_empty());
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let recipes = vec![
            recipe("liked", vec!["italian"]),
            recipe("a", vec!["italian"]),
            recipe("b", vec!["italian"]),
        ];
        let favorites = vec!["liked".to_string()];
        let recommended = recommend(&recipes, &favorites, &HashMap::new());
        let ids: Vec<&str> = recommended.iter().map(|r| r.recipe.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
