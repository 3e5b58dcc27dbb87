use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Difficulty selector for filtering: a specific level or "any"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    Any,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    /// Returns true if a recipe with the given difficulty passes this selector
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::Any => true,
            DifficultyFilter::Easy => difficulty == Difficulty::Easy,
            DifficultyFilter::Medium => difficulty == Difficulty::Medium,
            DifficultyFilter::Hard => difficulty == Difficulty::Hard,
        }
    }
}

/// User-controlled preference filters
///
/// Session-scoped and never persisted. `max_time` of zero or absent means
/// no time limit; an empty `diets` list means no diet restriction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default = "default_max_time")]
    pub max_time: Option<u32>,
    #[serde(default)]
    pub difficulty: DifficultyFilter,
    #[serde(default)]
    pub diets: Vec<String>,
}

fn default_max_time() -> Option<u32> {
    Some(60)
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            max_time: default_max_time(),
            difficulty: DifficultyFilter::Any,
            diets: Vec::new(),
        }
    }
}
