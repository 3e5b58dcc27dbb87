use std::time::Duration;

use crate::error::AppResult;

/// Fixed vocabulary the mock recognizer draws from
pub const SAMPLE_INGREDIENTS: [&str; 30] = [
    "tomato",
    "onion",
    "garlic",
    "olive oil",
    "chicken breast",
    "tofu",
    "pasta",
    "rice",
    "egg",
    "milk",
    "spinach",
    "bell pepper",
    "carrot",
    "cheddar",
    "mozzarella",
    "black beans",
    "lentils",
    "yogurt",
    "oats",
    "banana",
    "salmon",
    "broccoli",
    "zucchini",
    "mushroom",
    "potato",
    "avocado",
    "lime",
    "cilantro",
    "soy sauce",
    "ginger",
];

/// Ingredient recognition provider abstraction
///
/// The filename is only a determinism seed; no image data is inspected.
/// A real vision backend would implement this same trait.
#[async_trait::async_trait]
pub trait IngredientRecognizer: Send + Sync {
    /// Recognize ingredients from an uploaded image, identified by filename
    async fn recognize(&self, filename: &str) -> AppResult<Vec<String>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Seeded generator matching the reference mock endpoint
///
/// Seed: polynomial string hash (running hash times 31 plus the next UTF-16
/// code unit, wrapping in i32). Draws: LCG with multiplier 1664525 and
/// increment 1013904223 modulo 2^32, mapped to [0, 1).
struct SeededRng {
    state: u32,
}

impl SeededRng {
    fn from_seed(seed: &str) -> Self {
        let mut hash: i32 = 0;
        for unit in seed.encode_utf16() {
            hash = hash
                .wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(unit as i32);
        }
        Self { state: hash as u32 }
    }

    fn next(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state as f64 / 4_294_967_296.0
    }
}

/// Picks 4-7 unique vocabulary items for a seed, preserving pick order
fn pick_ingredients(seed: &str) -> Vec<String> {
    let mut rng = SeededRng::from_seed(seed);
    let count = 4 + (rng.next() * 4.0).floor() as usize;
    let mut picks: Vec<String> = Vec::with_capacity(count);
    while picks.len() < count {
        let idx = (rng.next() * SAMPLE_INGREDIENTS.len() as f64).floor() as usize;
        let pick = SAMPLE_INGREDIENTS[idx];
        if !picks.iter().any(|p| p == pick) {
            picks.push(pick.to_string());
        }
    }
    picks
}

/// Stand-in recognition service
///
/// Returns a pseudo-random ingredient list seeded by the filename and
/// simulates network latency before responding.
pub struct MockRecognizer {
    delay: Duration,
}

impl MockRecognizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl IngredientRecognizer for MockRecognizer {
    async fn recognize(&self, filename: &str) -> AppResult<Vec<String>> {
        tokio::time::sleep(self.delay).await;
        let ingredients = pick_ingredients(filename);
        tracing::debug!(
            provider = self.name(),
            seed = filename,
            count = ingredients.len(),
            "Mock recognition complete"
        );
        Ok(ingredients)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_per_seed() {
        let first = pick_ingredients("default");
        let second = pick_ingredients("default");
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_in_range_and_unique() {
        for seed in ["default", "dinner.jpg", "IMG_2041.png", ""] {
            let picks = pick_ingredients(seed);
            assert!(
                (4..=7).contains(&picks.len()),
                "seed {seed:?} produced {} picks",
                picks.len()
            );
            let mut deduped = picks.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), picks.len(), "seed {seed:?} repeated a pick");
        }
    }

    #[test]
    fn test_picks_come_from_vocabulary() {
        for pick in pick_ingredients("groceries.png") {
            assert!(SAMPLE_INGREDIENTS.contains(&pick.as_str()));
        }
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        assert_ne!(pick_ingredients("a.jpg"), pick_ingredients("b.jpg"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_recognizer_applies_delay() {
        let recognizer = MockRecognizer::new(Duration::from_millis(700));
        let start = tokio::time::Instant::now();
        let ingredients = recognizer.recognize("default").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(700));
        assert_eq!(ingredients, pick_ingredients("default"));
    }
}
