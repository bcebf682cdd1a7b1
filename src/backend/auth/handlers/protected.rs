/**
 * Protected Resource Handler
 *
 * GET /protected returns the user the bearer token was issued to. The token
 * itself is checked by `auth_middleware`; this handler resolves the subject.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::users::UserStore;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::ProtectedResponse;

pub const PROTECTED_MESSAGE: &str = "Yay! You sent your token correctly so I know who you are";

/// Protected resource handler
///
/// # Errors
///
/// * `401 Unauthorized` - token missing or invalid (from the middleware)
/// * `404 Not Found` - the token's user no longer exists
/// * `500 Internal Server Error` - database failure
pub async fn protected(
    State(users): State<UserStore>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ProtectedResponse>, ApiError> {
    let user = users.find_by_id(auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", auth.user_id);
        ApiError::NotFound
    })?;

    Ok(Json(ProtectedResponse {
        msg: PROTECTED_MESSAGE.to_string(),
        user_data: user.view(),
    }))
}
