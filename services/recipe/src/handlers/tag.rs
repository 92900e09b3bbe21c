use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::domain::types::Tag;
use crate::error::RecipeServiceError;
use crate::state::AppState;
use crate::usecase::tag::{CreateTagUseCase, ListTagsUseCase};

#[derive(Serialize)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name,
        }
    }
}

// ── GET /recipe/tags ─────────────────────────────────────────────────────────

pub async fn get_tags(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<TagResponse>>, RecipeServiceError> {
    let usecase = ListTagsUseCase {
        repo: state.tag_repo(),
    };
    let tags = usecase.execute(current.id).await?;
    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

// ── POST /recipe/tags ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

pub async fn create_tag(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(body): Json<CreateTagRequest>,
) -> Result<(StatusCode, Json<TagResponse>), RecipeServiceError> {
    let usecase = CreateTagUseCase {
        repo: state.tag_repo(),
    };
    let tag = usecase.execute(current.id, body.name).await?;
    Ok((StatusCode::CREATED, Json(TagResponse::from(tag))))
}
