/**
 * Authentication Wire Types
 *
 * Request bodies accepted by `POST /signup` and `POST /login`, and the
 * payloads returned by the auth endpoints.
 *
 * Request bodies reject unknown fields. Both credential fields are optional
 * at the type level so that an absent field can be reported by name instead
 * of surfacing as a generic decoding error.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign up request
#[derive(Deserialize, Serialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    /// Email address used as the login identifier
    pub email: Option<String>,
    /// Plaintext password, hashed before storage
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

// Passwords never reach logs through `{:?}`.
impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Public projection of a user
///
/// This is the only shape in which a user ever leaves the server. It has no
/// credential field, so no endpoint can leak one by accident.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed bearer token
    pub jwt: String,
}

/// Response of the protected resource
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProtectedResponse {
    /// Confirmation message
    pub msg: String,
    /// The authenticated user
    pub user_data: UserView,
}

/// Plain message response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}
