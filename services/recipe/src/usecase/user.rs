use anyhow::Context as _;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::{User, normalize_email, validate_email};
use crate::error::RecipeServiceError;

/// bcrypt is CPU-bound; run it off the async runtime.
pub(crate) async fn hash_password(password: String) -> Result<String, RecipeServiceError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .context("join password hashing task")?
        .context("hash password")?;
    Ok(hash)
}

pub(crate) async fn verify_password(
    password: String,
    hash: String,
) -> Result<bool, RecipeServiceError> {
    let ok = tokio::task::spawn_blocking(move || bcrypt::verify(&password, &hash).unwrap_or(false))
        .await
        .context("join password verification task")?;
    Ok(ok)
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub password: String,
    /// Superusers are created with both staff and superuser flags set.
    pub superuser: bool,
}

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, RecipeServiceError> {
        let email = normalize_email(&input.email);
        if !validate_email(&email) {
            return Err(RecipeServiceError::InvalidEmail);
        }
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(RecipeServiceError::EmailAlreadyExists);
        }
        let password_hash = hash_password(input.password).await?;
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email,
            password_hash,
            is_staff: input.superuser,
            is_superuser: input.superuser,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&user).await?;
        Ok(user)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, RecipeServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(RecipeServiceError::UserNotFound)
    }
}
