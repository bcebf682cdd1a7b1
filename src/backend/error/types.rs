/**
 * API Error Types
 *
 * This module defines the errors that handlers return. Every lower-level
 * failure (database, hashing, token decoding) is converted into one of
 * these kinds before it reaches the response, so internal error values
 * never end up in a payload.
 *
 * # Error Kinds
 *
 * - `Validation` - malformed or missing input (400)
 * - `Unauthorized` - bad credentials (400) or a missing/invalid token (401)
 * - `Conflict` - the email is already registered (409)
 * - `NotFound` - the token subject no longer exists (404)
 * - `StorageFault` - the database failed (500)
 * - `Internal` - any other server-side failure (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;

/// Message used for every failed login, whatever the cause
pub const BAD_CREDENTIALS: &str = "bad credentials";

/// Why a request was not authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// Unknown email or wrong password; the two are never told apart
    #[error("bad credentials")]
    BadCredentials,

    /// No `Authorization: Bearer` header on a protected route
    #[error("Missing Authorization Header")]
    MissingToken,

    /// The presented token did not validate
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Handler-boundary error
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(AuthFailure),

    #[error("email already registered")]
    Conflict,

    #[error("user not found")]
    NotFound,

    #[error("storage error")]
    StorageFault,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_credentials() -> Self {
        Self::Unauthorized(AuthFailure::BadCredentials)
    }

    /// Get the HTTP status code for this error
    ///
    /// Bad credentials answer 400 like a malformed login; token problems
    /// answer 401.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(AuthFailure::BadCredentials) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StorageFault | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<AuthFailure> for ApiError {
    fn from(failure: AuthFailure) -> Self {
        Self::Unauthorized(failure)
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self::Unauthorized(AuthFailure::Token(err))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Self::Conflict,
            StoreError::Storage(source) => {
                tracing::error!("Database error: {:?}", source);
                Self::StorageFault
            }
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        Self::Internal
    }
}
