/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token bound to the user id
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same status and message
 * - An unknown email still costs one bcrypt verify, so timing matches too
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::json::{required, ValidJson};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::UserStore;
use crate::backend::error::ApiError;
use crate::shared::{LoginRequest, TokenResponse};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - malformed body, missing field, or bad credentials
/// * `500 Internal Server Error` - database, hashing or token failure
///
/// # Example Response
///
/// ```json
/// { "jwt": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(users): State<UserStore>,
    State(passwords): State<PasswordHasher>,
    State(tokens): State<TokenIssuer>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let email = required(request.email.map(|e| e.trim().to_owned()), "email")?;
    let password = required(request.password, "password")?;
    let email = email.as_str();

    let Some(user) = users.find_by_email(email).await? else {
        passwords.verify_dummy(&password).await;
        tracing::warn!("Login failed for {}: no such user", email);
        return Err(ApiError::bad_credentials());
    };

    if !passwords.verify(&password, &user.password_hash).await? {
        tracing::warn!("Login failed for {}: wrong password", email);
        return Err(ApiError::bad_credentials());
    }

    let jwt = tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::Internal
    })?;

    tracing::info!("User logged in successfully: {}", user.id);

    Ok(Json(TokenResponse { jwt }))
}
