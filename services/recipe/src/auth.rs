//! Bearer token extractor backed by the token table.

use axum::extract::FromRequestParts;
use http::request::Parts;
use uuid::Uuid;

use crate::domain::repository::TokenRepository as _;
use crate::error::RecipeServiceError;
use crate::state::AppState;

/// The authenticated caller, resolved from the `Authorization` header.
///
/// Accepts `Bearer <key>` and `Token <key>` schemes. Returns 401 if the
/// header is absent, malformed, or the key matches no stored token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Pull the key out of an `Authorization` header value, scheme-insensitively.
fn bearer_key(header: &str) -> Option<&str> {
    let (scheme, key) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") && !scheme.eq_ignore_ascii_case("token") {
        return None;
    }
    let key = key.trim();
    (!key.is_empty()).then_some(key)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = RecipeServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let key = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_key)
            .map(str::to_owned);
        let repo = state.token_repo();

        async move {
            let key = key.ok_or(RecipeServiceError::Unauthorized)?;
            let user = repo
                .find_user_by_key(&key)
                .await?
                .ok_or(RecipeServiceError::Unauthorized)?;
            Ok(Self {
                id: user.id,
                email: user.email,
                is_staff: user.is_staff,
                is_superuser: user.is_superuser,
            })
        }
    }
}
