use serde::{Deserialize, Serialize};

/// Recipe difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Per-serving nutrition facts; any field may be absent in the dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrients {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

/// A recipe ingredient as it appears in the dataset
///
/// The dataset contains two shapes: a bare name string, or a structured
/// record with quantity/unit details. Both carry the same canonical name;
/// consumers go through [`Ingredient::name`] rather than probing the shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Ingredient {
    Name(String),
    Detailed(IngredientDetail),
}

/// Structured ingredient record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientDetail {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<Vec<String>>,
}

impl Ingredient {
    /// Returns the ingredient name regardless of shape
    pub fn name(&self) -> &str {
        match self {
            Ingredient::Name(name) => name,
            Ingredient::Detailed(detail) => &detail.name,
        }
    }
}

/// A recipe from the static dataset
///
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Time to cook in minutes
    pub time: u32,
    pub difficulty: Difficulty,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrients,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diets: Option<Vec<String>>,
}
