/**
 * Authentication Middleware
 *
 * Protects routes that need a signed-in user. The middleware reads the
 * `Authorization: Bearer <token>` header, validates the token and stores
 * the subject in the request extensions, where the `AuthUser` extractor
 * picks it up.
 *
 * Only the token is checked here. Whether the subject still exists is the
 * handler's business, so it can answer 404 rather than 401.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::error::{ApiError, AuthFailure};

/// Authenticated user data extracted from the token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing, malformed, forged or
/// expired.
pub async fn auth_middleware(
    State(tokens): State<TokenIssuer>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;

    let user_id = tokens.validate(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::from(e)
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::from(AuthFailure::MissingToken)
        })?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::from(AuthFailure::MissingToken)
        })
}

/// Axum extractor for the authenticated user
///
/// Only works on routes behind `auth_middleware`.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::from(AuthFailure::MissingToken)
            })?;

        Ok(AuthUser(user))
    }
}
