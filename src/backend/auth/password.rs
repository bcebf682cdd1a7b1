/**
 * Password Hashing
 *
 * Passwords are stored as salted bcrypt hashes and checked with bcrypt's
 * constant-time verify. Both operations are CPU-bound and run on the
 * blocking thread pool.
 *
 * bcrypt only reads the first 72 bytes of its input. The non-truncating
 * variants are used throughout, so a longer password is refused when hashed
 * and never matches when verified.
 *
 * Login against an unknown email still performs one verify, against a
 * dummy hash made at startup, so both failure paths cost the same.
 */

use bcrypt::BcryptError;
use thiserror::Error;
use tokio::task::spawn_blocking;

/// Longest password bcrypt can hash without truncating it
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Failure to hash or verify a password
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hashes and verifies passwords
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: String,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        let dummy_hash = bcrypt::non_truncating_hash("authgate-dummy-password", cost)?;
        Ok(Self { cost, dummy_hash })
    }

    /// Hash a password for storage
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = spawn_blocking(move || bcrypt::non_truncating_hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Check a password against a stored hash
    pub async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();
        let result =
            spawn_blocking(move || bcrypt::non_truncating_verify(password, &stored_hash)).await?;

        match result {
            Ok(valid) => Ok(valid),
            // Too long to have been hashed, so it cannot be the stored password
            Err(BcryptError::Truncation(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Burn one verification for a login whose email matched nobody
    pub async fn verify_dummy(&self, password: &str) {
        if let Err(e) = self.verify(password, &self.dummy_hash).await {
            tracing::error!("Dummy password verification failed: {:?}", e);
        }
    }
}
