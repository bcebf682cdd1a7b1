/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Require both fields, a plausible email and a password bcrypt can hash
 *    whole
 * 2. Hash the password using bcrypt
 * 3. Insert the user; the UNIQUE constraint decides duplicates
 * 4. Return the public view of the new user
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::json::{required, ValidJson};
use crate::backend::auth::password::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::backend::auth::users::{StoreError, UserStore};
use crate::backend::error::ApiError;
use crate::shared::{SignupRequest, UserView};

/// Basic email shape check: one `@` with something on each side, no spaces
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - missing field, unknown field, or invalid email
/// * `409 Conflict` - the email is already registered
/// * `500 Internal Server Error` - hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "securepassword123" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "id": "123e4567-e89b-12d3-a456-426614174000", "email": "user@example.com" }
/// ```
pub async fn signup(
    State(users): State<UserStore>,
    State(passwords): State<PasswordHasher>,
    ValidJson(request): ValidJson<SignupRequest>,
) -> Result<Json<UserView>, ApiError> {
    let email = required(request.email.map(|e| e.trim().to_owned()), "email")?;
    let password = required(request.password, "password")?;
    let email = email.as_str();

    if !is_valid_email(email) {
        tracing::warn!("Invalid email format: {}", email);
        return Err(ApiError::validation("Invalid email format"));
    }

    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ApiError::validation(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        )));
    }

    let password_hash = passwords.hash(&password).await?;

    let user = users.create(email, &password_hash).await.map_err(|e| {
        if let StoreError::Conflict = e {
            tracing::warn!("Email already exists: {}", email);
        }
        ApiError::from(e)
    })?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok(Json(user.view()))
}
