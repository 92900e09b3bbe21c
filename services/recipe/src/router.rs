use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use ladle_core::health::{healthz, readyz};
use ladle_core::middleware::request_id_layer;

use crate::handlers::{
    ingredient::{create_ingredient, get_ingredients},
    recipe::{create_recipe, get_recipe, get_recipes, update_recipe, upload_recipe_image},
    tag::{create_tag, get_tags},
    token::issue_token,
    user::{create_user, get_me},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", post(create_user))
        .route("/users/token", post(issue_token))
        .route("/users/@me", get(get_me))
        // Tags
        .route("/recipe/tags", get(get_tags))
        .route("/recipe/tags", post(create_tag))
        // Ingredients
        .route("/recipe/ingredients", get(get_ingredients))
        .route("/recipe/ingredients", post(create_ingredient))
        // Recipes
        .route("/recipe/recipes", get(get_recipes))
        .route("/recipe/recipes", post(create_recipe))
        .route("/recipe/recipes/{id}", get(get_recipe))
        .route("/recipe/recipes/{id}", patch(update_recipe))
        .route("/recipe/recipes/{id}/image", post(upload_recipe_image))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
