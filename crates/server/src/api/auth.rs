//! Acting-user identity for review mutations.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::state::AppState;

/// Header carrying the acting user's id. Session and token handling
/// live outside this service; the header names an already-established
/// identity.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor resolving the `X-User-Id` header to a stored user.
/// Rejects with 401 when the header is missing, malformed, or names
/// no known user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(|| AppError::unauthorized("Missing or malformed X-User-Id header"))?;

        let user = UserRepository::get_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

        Ok(CurrentUser(user))
    }
}
