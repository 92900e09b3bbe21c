#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    AuthToken, Ingredient, NewRecipe, Recipe, RecipeChanges, RecipeDetail, RecipeFilter, Tag, User,
};
use crate::error::RecipeServiceError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RecipeServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RecipeServiceError>;
    async fn create(&self, user: &User) -> Result<(), RecipeServiceError>;
}

/// Repository for opaque bearer tokens.
pub trait TokenRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<AuthToken>, RecipeServiceError>;

    /// Resolve a presented key to its owning user in one lookup.
    async fn find_user_by_key(&self, key: &str) -> Result<Option<User>, RecipeServiceError>;

    async fn create(&self, token: &AuthToken) -> Result<(), RecipeServiceError>;
}

/// Repository for user-owned tags.
pub trait TagRepository: Send + Sync {
    /// The caller's tags, ordered by name descending.
    async fn list(&self, user_id: Uuid) -> Result<Vec<Tag>, RecipeServiceError>;

    /// The subset of `ids` that the caller owns.
    async fn list_by_ids(&self, user_id: Uuid, ids: &[i32]) -> Result<Vec<Tag>, RecipeServiceError>;

    async fn create(&self, user_id: Uuid, name: &str) -> Result<Tag, RecipeServiceError>;
}

/// Repository for user-owned ingredients.
pub trait IngredientRepository: Send + Sync {
    /// The caller's ingredients, ordered by name descending.
    async fn list(&self, user_id: Uuid) -> Result<Vec<Ingredient>, RecipeServiceError>;

    /// The subset of `ids` that the caller owns.
    async fn list_by_ids(
        &self,
        user_id: Uuid,
        ids: &[i32],
    ) -> Result<Vec<Ingredient>, RecipeServiceError>;

    async fn create(&self, user_id: Uuid, name: &str) -> Result<Ingredient, RecipeServiceError>;
}

/// Repository for recipes and their tag/ingredient associations.
pub trait RecipeRepository: Send + Sync {
    /// The caller's recipes, newest first.
    async fn list(
        &self,
        user_id: Uuid,
        filter: &RecipeFilter,
    ) -> Result<Vec<Recipe>, RecipeServiceError>;

    async fn get(
        &self,
        user_id: Uuid,
        id: i32,
    ) -> Result<Option<RecipeDetail>, RecipeServiceError>;

    async fn create(&self, recipe: &NewRecipe) -> Result<Recipe, RecipeServiceError>;

    /// Apply a partial update. Returns `false` if the caller owns no such recipe.
    async fn update(
        &self,
        user_id: Uuid,
        id: i32,
        changes: &RecipeChanges,
    ) -> Result<bool, RecipeServiceError>;

    /// Record the stored image path. Returns `false` if the caller owns no such recipe.
    async fn set_image(
        &self,
        user_id: Uuid,
        id: i32,
        path: &str,
    ) -> Result<bool, RecipeServiceError>;
}

/// Port for persisting uploaded image bytes under the media root.
pub trait ImageStore: Send + Sync {
    async fn save(&self, relative_path: &str, bytes: &[u8]) -> Result<(), RecipeServiceError>;
}
