use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::storage::kv::StoragePort;

/// Storage key for the ordered list of favorite recipe ids
pub const FAVORITES_KEY: &str = "recipe:favorites";

/// Storage key for the recipe-id to star-rating mapping
pub const RATINGS_KEY: &str = "recipe:ratings";

/// Favorites and ratings for one client, written through a storage port
///
/// Favorites keep insertion order and contain no duplicates; ratings are
/// integers in 1..=5 where absence means "unrated". The two are independent:
/// a recipe may be rated without being favorited and vice versa.
pub struct Profile {
    store: Arc<dyn StoragePort>,
    favorites: Vec<String>,
    ratings: HashMap<String, u8>,
}

impl Profile {
    /// Loads the persisted profile, starting empty when no state exists
    pub async fn load(store: Arc<dyn StoragePort>) -> AppResult<Self> {
        let favorites = match store.get(FAVORITES_KEY).await? {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        let ratings = match store.get(RATINGS_KEY).await? {
            Some(value) => serde_json::from_value(value)?,
            None => HashMap::new(),
        };
        Ok(Self {
            store,
            favorites,
            ratings,
        })
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn ratings(&self) -> &HashMap<String, u8> {
        &self.ratings
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    pub fn rating(&self, id: &str) -> Option<u8> {
        self.ratings.get(id).copied()
    }

    /// Adds the id if absent, removes it if present; returns the new state
    pub async fn toggle_favorite(&mut self, id: &str) -> AppResult<bool> {
        let favorited = if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id.to_string());
            true
        };
        self.store
            .set(FAVORITES_KEY, json!(self.favorites))
            .await?;
        Ok(favorited)
    }

    /// Sets a star rating in 1..=5, overwriting any prior rating
    pub async fn set_rating(&mut self, id: &str, rating: u8) -> AppResult<()> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::InvalidInput(format!(
                "Rating must be between 1 and 5, got {rating}"
            )));
        }
        self.ratings.insert(id.to_string(), rating);
        self.store.set(RATINGS_KEY, json!(self.ratings)).await?;
        Ok(())
    }
}
