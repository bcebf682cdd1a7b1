/**
 * Application State Management
 *
 * `AppState` bundles the three auth components. Each is cheap to clone
 * (the store wraps a pooled handle, the hasher and issuer hold immutable
 * keys), and none of them carries mutable in-process state: the only shared
 * mutable resource is the database.
 *
 * The `FromRef` implementations let handlers extract just the component
 * they use, following Axum's recommended pattern.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::{PasswordError, PasswordHasher};
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::UserStore;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// User persistence
    pub users: UserStore,
    /// Password hashing and verification
    pub passwords: PasswordHasher,
    /// Session token signing and validation
    pub tokens: TokenIssuer,
}

impl AppState {
    /// Build the state from a database pool and the server configuration
    pub fn new(pool: SqlitePool, config: &ServerConfig) -> Result<Self, PasswordError> {
        Ok(Self {
            users: UserStore::new(pool),
            passwords: PasswordHasher::new(config.bcrypt_cost)?,
            tokens: TokenIssuer::new(&config.jwt),
        })
    }
}

impl FromRef<AppState> for UserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords.clone()
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// State over a fresh in-memory database, with a fixed secret and the
/// cheapest bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    use crate::backend::server::init::connect_in_memory;

    let config = ServerConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some("test-secret".to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        _ => None,
    })
    .unwrap();
    let pool = connect_in_memory().await.unwrap();
    AppState::new(pool, &config).unwrap()
}
