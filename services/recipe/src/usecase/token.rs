use chrono::Utc;
use rand::{Rng as _, distr::Alphanumeric};

use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::types::{AuthToken, normalize_email};
use crate::error::RecipeServiceError;
use crate::usecase::user::verify_password;

/// Length of an issued token key.
pub const TOKEN_KEY_LEN: usize = 40;

/// Generate a random alphanumeric token key.
pub fn generate_token_key() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(TOKEN_KEY_LEN)
        .map(char::from)
        .collect()
}

// ── IssueToken (login) ───────────────────────────────────────────────────────

pub struct IssueTokenInput {
    pub email: String,
    pub password: String,
}

pub struct IssueTokenUseCase<U: UserRepository, T: TokenRepository> {
    pub users: U,
    pub tokens: T,
}

impl<U: UserRepository, T: TokenRepository> IssueTokenUseCase<U, T> {
    /// Exchange email + password for the user's token key. A user keeps the
    /// same key across logins; the first login creates it.
    pub async fn execute(&self, input: IssueTokenInput) -> Result<String, RecipeServiceError> {
        let email = normalize_email(&input.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(RecipeServiceError::InvalidCredentials)?;

        if !verify_password(input.password, user.password_hash.clone()).await? {
            return Err(RecipeServiceError::InvalidCredentials);
        }

        if let Some(existing) = self.tokens.find_by_user(user.id).await? {
            return Ok(existing.key);
        }

        let token = AuthToken {
            key: generate_token_key(),
            user_id: user.id,
            created_at: Utc::now(),
        };
        self.tokens.create(&token).await?;
        Ok(token.key)
    }
}
