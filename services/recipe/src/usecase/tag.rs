use uuid::Uuid;

use crate::domain::repository::TagRepository;
use crate::domain::types::Tag;
use crate::error::RecipeServiceError;

// ── ListTags ─────────────────────────────────────────────────────────────────

pub struct ListTagsUseCase<R: TagRepository> {
    pub repo: R,
}

impl<R: TagRepository> ListTagsUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Tag>, RecipeServiceError> {
        self.repo.list(user_id).await
    }
}

// ── CreateTag ────────────────────────────────────────────────────────────────

pub struct CreateTagUseCase<R: TagRepository> {
    pub repo: R,
}

impl<R: TagRepository> CreateTagUseCase<R> {
    pub async fn execute(&self, user_id: Uuid, name: String) -> Result<Tag, RecipeServiceError> {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(RecipeServiceError::MissingData);
        }
        self.repo.create(user_id, &name).await
    }
}
