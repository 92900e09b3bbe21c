use uuid::Uuid;

use crate::domain::repository::{ImageStore, RecipeRepository};
use crate::domain::types::recipe_image_path;
use crate::error::RecipeServiceError;

// ── AttachRecipeImage ────────────────────────────────────────────────────────

pub struct AttachRecipeImageUseCase<R: RecipeRepository, S: ImageStore> {
    pub repo: R,
    pub store: S,
}

impl<R: RecipeRepository, S: ImageStore> AttachRecipeImageUseCase<R, S> {
    /// Store the uploaded bytes under a collision-free path and record that
    /// path on the recipe. Returns the stored relative path.
    pub async fn execute(
        &self,
        user_id: Uuid,
        recipe_id: i32,
        original_name: &str,
        data: &[u8],
    ) -> Result<String, RecipeServiceError> {
        // Ownership check up front so a stranger's upload never touches disk.
        if self.repo.get(user_id, recipe_id).await?.is_none() {
            return Err(RecipeServiceError::RecipeNotFound);
        }

        let stem = Uuid::new_v4().to_string();
        let path = recipe_image_path(&stem, original_name);
        self.store.save(&path, data).await?;

        if !self.repo.set_image(user_id, recipe_id, &path).await? {
            return Err(RecipeServiceError::RecipeNotFound);
        }
        Ok(path)
    }
}
