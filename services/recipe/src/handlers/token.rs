use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::RecipeServiceError;
use crate::state::AppState;
use crate::usecase::token::{IssueTokenInput, IssueTokenUseCase};

// ── POST /users/token ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct IssueTokenRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn issue_token(
    State(state): State<AppState>,
    Json(body): Json<IssueTokenRequest>,
) -> Result<Json<TokenResponse>, RecipeServiceError> {
    let usecase = IssueTokenUseCase {
        users: state.user_repo(),
        tokens: state.token_repo(),
    };
    let token = usecase
        .execute(IssueTokenInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(TokenResponse { token }))
}
