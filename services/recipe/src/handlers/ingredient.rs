use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::domain::types::Ingredient;
use crate::error::RecipeServiceError;
use crate::state::AppState;
use crate::usecase::ingredient::{CreateIngredientUseCase, ListIngredientsUseCase};

#[derive(Serialize)]
pub struct IngredientResponse {
    pub id: i32,
    pub name: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name,
        }
    }
}

// ── GET /recipe/ingredients ──────────────────────────────────────────────────

pub async fn get_ingredients(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<IngredientResponse>>, RecipeServiceError> {
    let usecase = ListIngredientsUseCase {
        repo: state.ingredient_repo(),
    };
    let ingredients = usecase.execute(current.id).await?;
    Ok(Json(
        ingredients
            .into_iter()
            .map(IngredientResponse::from)
            .collect(),
    ))
}

// ── POST /recipe/ingredients ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateIngredientRequest {
    pub name: String,
}

pub async fn create_ingredient(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<IngredientResponse>), RecipeServiceError> {
    let usecase = CreateIngredientUseCase {
        repo: state.ingredient_repo(),
    };
    let ingredient = usecase.execute(current.id, body.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(IngredientResponse::from(ingredient)),
    ))
}
