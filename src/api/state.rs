use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Recipe;
use crate::services::normalize::normalized_name;
use crate::services::recognition::IngredientRecognizer;
use crate::storage::Profile;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Static recipe dataset, loaded once and never mutated
    pub recipes: Arc<Vec<Recipe>>,
    pub recognizer: Arc<dyn IngredientRecognizer>,
    pub session: Arc<RwLock<Session>>,
}

/// Mutable per-process session state
pub struct Session {
    selected: Vec<String>,
    pub profile: Profile,
}

impl AppState {
    pub fn new(
        recipes: Vec<Recipe>,
        recognizer: Arc<dyn IngredientRecognizer>,
        profile: Profile,
    ) -> Self {
        Self {
            recipes: Arc::new(recipes),
            recognizer,
            session: Arc::new(RwLock::new(Session {
                selected: Vec::new(),
                profile,
            })),
        }
    }
}

impl Session {
    /// Currently selected on-hand ingredient names, in insertion order
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Adds one ingredient; returns false for empty names or duplicates
    pub fn add_ingredient(&mut self, name: &str) -> bool {
        let Some(name) = normalized_name(name) else {
            return false;
        };
        if self.selected.contains(&name) {
            return false;
        }
        self.selected.push(name);
        true
    }

    /// Removes one ingredient by name, case-insensitively
    pub fn remove_ingredient(&mut self, name: &str) {
        let name = name.trim().to_lowercase();
        self.selected.retain(|s| *s != name);
    }

    pub fn clear_ingredients(&mut self) {
        self.selected.clear();
    }

    /// Union-merges recognized ingredient names into the selection
    pub fn merge_ingredients(&mut self, names: &[String]) -> usize {
        names
            .iter()
            .filter(|name| self.add_ingredient(name))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, Profile};

    async fn session() -> Session {
        Session {
            selected: Vec::new(),
            profile: Profile::load(Arc::new(MemoryStore::new())).await.unwrap(),
        }
    }

    #[tokio::test]
    async fn test_add_normalizes_and_dedupes() {
        let mut session = session().await;
        assert!(session.add_ingredient("  Tomato "));
        assert!(!session.add_ingredient("tomato"));
        assert!(!session.add_ingredient("   "));
        assert_eq!(session.selected(), ["tomato"]);
    }

    #[tokio::test]
    async fn test_remove_is_case_insensitive() {
        let mut session = session().await;
        session.add_ingredient("onion");
        session.remove_ingredient("ONION");
        assert!(session.selected().is_empty());
    }

    #[tokio::test]
    async fn test_merge_unions_preserving_existing() {
        let mut session = session().await;
        session.add_ingredient("tomato");
        let added = session.merge_ingredients(&[
            "tomato".to_string(),
            "garlic".to_string(),
            "lime".to_string(),
        ]);
        assert_eq!(added, 2);
        assert_eq!(session.selected(), ["tomato", "garlic", "lime"]);
    }
}
