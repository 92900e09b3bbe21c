use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::repository::{IngredientRepository, RecipeRepository, TagRepository};
use crate::domain::types::{NewRecipe, Recipe, RecipeChanges, RecipeDetail, RecipeFilter};
use crate::error::RecipeServiceError;

/// Distinct count of `ids`, for comparing against what the caller owns.
fn distinct_count(ids: &[i32]) -> usize {
    let mut seen = ids.to_vec();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}

async fn ensure_owned_tags<T: TagRepository>(
    tags: &T,
    user_id: Uuid,
    ids: &[i32],
) -> Result<(), RecipeServiceError> {
    if ids.is_empty() {
        return Ok(());
    }
    let owned = tags.list_by_ids(user_id, ids).await?;
    if owned.len() != distinct_count(ids) {
        return Err(RecipeServiceError::TagNotFound);
    }
    Ok(())
}

async fn ensure_owned_ingredients<I: IngredientRepository>(
    ingredients: &I,
    user_id: Uuid,
    ids: &[i32],
) -> Result<(), RecipeServiceError> {
    if ids.is_empty() {
        return Ok(());
    }
    let owned = ingredients.list_by_ids(user_id, ids).await?;
    if owned.len() != distinct_count(ids) {
        return Err(RecipeServiceError::IngredientNotFound);
    }
    Ok(())
}

// ── ListRecipes ──────────────────────────────────────────────────────────────

pub struct ListRecipesUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> ListRecipesUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        filter: RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipeServiceError> {
        self.repo.list(user_id, &filter).await
    }
}

// ── GetRecipe ────────────────────────────────────────────────────────────────

pub struct GetRecipeUseCase<R: RecipeRepository> {
    pub repo: R,
}

impl<R: RecipeRepository> GetRecipeUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        recipe_id: i32,
    ) -> Result<RecipeDetail, RecipeServiceError> {
        self.repo
            .get(user_id, recipe_id)
            .await?
            .ok_or(RecipeServiceError::RecipeNotFound)
    }
}

// ── CreateRecipe ─────────────────────────────────────────────────────────────

pub struct CreateRecipeInput {
    pub title: String,
    pub time_minutes: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub link: Option<String>,
    pub tag_ids: Vec<i32>,
    pub ingredient_ids: Vec<i32>,
}

pub struct CreateRecipeUseCase<R: RecipeRepository, T: TagRepository, I: IngredientRepository> {
    pub recipes: R,
    pub tags: T,
    pub ingredients: I,
}

impl<R: RecipeRepository, T: TagRepository, I: IngredientRepository>
    CreateRecipeUseCase<R, T, I>
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: CreateRecipeInput,
    ) -> Result<Recipe, RecipeServiceError> {
        let title = input.title.trim().to_owned();
        if title.is_empty() {
            return Err(RecipeServiceError::MissingData);
        }
        ensure_owned_tags(&self.tags, user_id, &input.tag_ids).await?;
        ensure_owned_ingredients(&self.ingredients, user_id, &input.ingredient_ids).await?;

        self.recipes
            .create(&NewRecipe {
                user_id,
                title,
                time_minutes: input.time_minutes,
                price: input.price,
                description: input.description,
                link: input.link,
                tag_ids: input.tag_ids,
                ingredient_ids: input.ingredient_ids,
            })
            .await
    }
}

// ── UpdateRecipe ─────────────────────────────────────────────────────────────

pub struct UpdateRecipeUseCase<R: RecipeRepository, T: TagRepository, I: IngredientRepository> {
    pub recipes: R,
    pub tags: T,
    pub ingredients: I,
}

impl<R: RecipeRepository, T: TagRepository, I: IngredientRepository>
    UpdateRecipeUseCase<R, T, I>
{
    pub async fn execute(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        changes: RecipeChanges,
    ) -> Result<(), RecipeServiceError> {
        if changes.is_empty() {
            return Err(RecipeServiceError::MissingData);
        }
        if let Some(ref title) = changes.title {
            if title.trim().is_empty() {
                return Err(RecipeServiceError::MissingData);
            }
        }
        if let Some(ref ids) = changes.tag_ids {
            ensure_owned_tags(&self.tags, user_id, ids).await?;
        }
        if let Some(ref ids) = changes.ingredient_ids {
            ensure_owned_ingredients(&self.ingredients, user_id, ids).await?;
        }

        let updated = self.recipes.update(user_id, recipe_id, &changes).await?;
        if !updated {
            return Err(RecipeServiceError::RecipeNotFound);
        }
        Ok(())
    }
}
