use std::collections::BTreeSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{Filters, Recipe};
use crate::services::matching::{on_hand_set, MatchScore};
use crate::services::ranking::{rank, RankedRecipe};
use crate::services::recommendations::recommend;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// On-hand ingredients; defaults to the session selection when absent
    pub ingredients: Option<Vec<String>>,
    pub filters: Option<Filters>,
}

#[derive(Debug, Serialize)]
pub struct RankedRecipeResponse {
    pub recipe: Recipe,
    #[serde(flatten)]
    pub score: MatchScore,
}

impl From<RankedRecipe<'_>> for RankedRecipeResponse {
    fn from(ranked: RankedRecipe<'_>) -> Self {
        Self {
            recipe: ranked.recipe.clone(),
            score: ranked.score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IngredientRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct IngredientsResponse {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecognizeRequest {
    pub filename: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub recipe_id: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub favorited: bool,
    pub favorites: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub recipe_id: String,
    pub rating: i64,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub favorites: Vec<String>,
    pub ratings: std::collections::HashMap<String, u8>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recipe: Recipe,
    pub score: f64,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the full recipe dataset
pub async fn get_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json((*state.recipes).clone())
}

/// Rank recipes against on-hand ingredients and active filters
pub async fn search_recipes(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Json<Vec<RankedRecipeResponse>> {
    let session = state.session.read().await;
    let ingredients = request
        .ingredients
        .unwrap_or_else(|| session.selected().to_vec());
    let filters = request.filters.unwrap_or_default();
    let on_hand = on_hand_set(&ingredients);

    let ranked = rank(&state.recipes, &filters, &on_hand);

    tracing::info!(
        request_id = %request_id,
        on_hand = on_hand.len(),
        results = ranked.len(),
        "Ranked recipe search"
    );

    Json(ranked.into_iter().map(RankedRecipeResponse::from).collect())
}

/// Get the session's selected ingredients
pub async fn get_ingredients(State(state): State<AppState>) -> Json<IngredientsResponse> {
    let session = state.session.read().await;
    Json(IngredientsResponse {
        ingredients: session.selected().to_vec(),
    })
}

/// Add one ingredient to the selection
pub async fn add_ingredient(
    State(state): State<AppState>,
    Json(request): Json<IngredientRequest>,
) -> AppResult<Json<IngredientsResponse>> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Ingredient name must not be empty".to_string(),
        ));
    }
    let mut session = state.session.write().await;
    session.add_ingredient(&request.name);
    Ok(Json(IngredientsResponse {
        ingredients: session.selected().to_vec(),
    }))
}

/// Remove one ingredient from the selection
pub async fn remove_ingredient(
    State(state): State<AppState>,
    Json(request): Json<IngredientRequest>,
) -> Json<IngredientsResponse> {
    let mut session = state.session.write().await;
    session.remove_ingredient(&request.name);
    Json(IngredientsResponse {
        ingredients: session.selected().to_vec(),
    })
}

/// Clear the ingredient selection
pub async fn clear_ingredients(State(state): State<AppState>) -> Json<IngredientsResponse> {
    let mut session = state.session.write().await;
    session.clear_ingredients();
    Json(IngredientsResponse {
        ingredients: Vec::new(),
    })
}

/// Suggest ingredient names drawn from the dataset, sorted and deduplicated
pub async fn suggest_ingredients(State(state): State<AppState>) -> Json<Vec<String>> {
    let suggestions: BTreeSet<String> = state
        .recipes
        .iter()
        .flat_map(|recipe| crate::services::normalize::normalized_names(&recipe.ingredients))
        .collect();
    Json(suggestions.into_iter().collect())
}

/// Run mock ingredient recognition and merge the result into the selection
///
/// A malformed body yields a 400 with no state mutation; a recognizer
/// failure leaves the selection unchanged.
pub async fn recognize(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecognizeRequest>, JsonRejection>,
) -> AppResult<Json<IngredientsResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let seed = request.filename.unwrap_or_else(|| "default".to_string());

    let ingredients = state.recognizer.recognize(&seed).await?;

    let mut session = state.session.write().await;
    let added = session.merge_ingredients(&ingredients);

    tracing::info!(
        request_id = %request_id,
        recognized = ingredients.len(),
        added,
        "Recognition merged into selection"
    );

    Ok(Json(IngredientsResponse { ingredients }))
}

/// Get the persisted favorites and ratings
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let session = state.session.read().await;
    Json(ProfileResponse {
        favorites: session.profile.favorites().to_vec(),
        ratings: session.profile.ratings().clone(),
    })
}

/// Toggle a recipe in the favorites set
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Json(request): Json<FavoriteRequest>,
) -> AppResult<Json<FavoriteResponse>> {
    let mut session = state.session.write().await;
    let favorited = session.profile.toggle_favorite(&request.recipe_id).await?;
    Ok(Json(FavoriteResponse {
        favorited,
        favorites: session.profile.favorites().to_vec(),
    }))
}

/// Favorited recipes in favorites order; ids no longer in the dataset are skipped
pub async fn get_favorite_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    let session = state.session.read().await;
    let recipes = session
        .profile
        .favorites()
        .iter()
        .filter_map(|id| state.recipes.iter().find(|r| &r.id == id))
        .cloned()
        .collect();
    Json(recipes)
}

/// Set a star rating for a recipe
pub async fn set_rating(
    State(state): State<AppState>,
    Json(request): Json<RatingRequest>,
) -> AppResult<StatusCode> {
    let rating = u8::try_from(request.rating).map_err(|_| {
        AppError::InvalidInput(format!(
            "Rating must be between 1 and 5, got {}",
            request.rating
        ))
    })?;
    let mut session = state.session.write().await;
    session.profile.set_rating(&request.recipe_id, rating).await?;
    Ok(StatusCode::OK)
}

/// Recommend recipes based on favorites and high ratings
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> Json<Vec<RecommendationResponse>> {
    let session = state.session.read().await;
    let recommended = recommend(
        &state.recipes,
        session.profile.favorites(),
        session.profile.ratings(),
    );
    Json(
        recommended
            .into_iter()
            .map(|r| RecommendationResponse {
                recipe: r.recipe.clone(),
                score: r.score,
            })
            .collect(),
    )
}
