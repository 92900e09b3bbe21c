use std::path::PathBuf;

use anyhow::Context as _;

use crate::domain::repository::ImageStore;
use crate::error::RecipeServiceError;

/// Writes uploaded images to the local filesystem under the media root.
#[derive(Clone)]
pub struct LocalImageStore {
    pub media_root: PathBuf,
}

impl ImageStore for LocalImageStore {
    async fn save(&self, relative_path: &str, bytes: &[u8]) -> Result<(), RecipeServiceError> {
        let full_path = self.media_root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("create media directory")?;
        }
        tokio::fs::write(&full_path, bytes)
            .await
            .context("write image file")?;
        Ok(())
    }
}
