/**
 * Session Tokens
 *
 * Stateless bearer tokens: an HS256 JWT carrying the user id as `sub`, plus
 * `iat` and `exp`. Nothing is stored server-side; a token is valid exactly
 * when its signature checks out against the configured secret and `exp` has
 * not passed.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::server::config::JwtConfig;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a presented token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a decodable JWT, or its claims are unusable
    #[error("Invalid token")]
    Malformed,
    /// Tampered, or signed with another secret
    #[error("Signature verification failed")]
    SignatureInvalid,
    #[error("Token has expired")]
    Expired,
}

/// Issues and validates session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: Duration::seconds(config.ttl_secs),
        }
    }

    /// Create a token for `subject`, valid from now for the configured TTL
    pub fn issue(&self, subject: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(subject, Utc::now())
    }

    /// Create a token as if issued at `issued_at`
    pub fn issue_at(
        &self,
        subject: Uuid,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token and return its subject
    pub fn validate(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            }
        })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Malformed)
    }
}
