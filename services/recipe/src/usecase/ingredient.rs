use uuid::Uuid;

use crate::domain::repository::IngredientRepository;
use crate::domain::types::Ingredient;
use crate::error::RecipeServiceError;

// ── ListIngredients ──────────────────────────────────────────────────────────

pub struct ListIngredientsUseCase<R: IngredientRepository> {
    pub repo: R,
}

impl<R: IngredientRepository> ListIngredientsUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Ingredient>, RecipeServiceError> {
        self.repo.list(user_id).await
    }
}

// ── CreateIngredient ─────────────────────────────────────────────────────────

pub struct CreateIngredientUseCase<R: IngredientRepository> {
    pub repo: R,
}

impl<R: IngredientRepository> CreateIngredientUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        name: String,
    ) -> Result<Ingredient, RecipeServiceError> {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(RecipeServiceError::MissingData);
        }
        self.repo.create(user_id, &name).await
    }
}
