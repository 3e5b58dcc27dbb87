use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Recipes
        .route("/recipes", get(handlers::get_recipes))
        .route("/recipes/search", post(handlers::search_recipes))
        // Selected ingredients
        .route("/ingredients", get(handlers::get_ingredients))
        .route("/ingredients/add", post(handlers::add_ingredient))
        .route("/ingredients/remove", post(handlers::remove_ingredient))
        .route("/ingredients/clear", post(handlers::clear_ingredients))
        .route("/ingredients/suggestions", get(handlers::suggest_ingredients))
        // Mock recognition
        .route("/recognize", post(handlers::recognize))
        // Favorites and ratings
        .route("/profile", get(handlers::get_profile))
        .route("/favorites/toggle", post(handlers::toggle_favorite))
        .route("/favorites/recipes", get(handlers::get_favorite_recipes))
        .route("/ratings", post(handlers::set_rating))
        // Recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
