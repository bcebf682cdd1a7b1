/**
 * Server Initialization
 *
 * Opens the database, applies migrations, builds the application state and
 * hands it to the router. Any failure aborts startup.
 */

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Startup failure
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password hasher error: {0}")]
    Password(#[from] PasswordError),
}

/// Connect to the database and run migrations
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Open a private in-memory database with the schema applied
///
/// An in-memory SQLite database lives as long as its connection, so the
/// pool is pinned to a single connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing authgate server");

    let pool = connect_database(&config.database_url).await?;
    let app_state = AppState::new(pool, config)?;

    Ok(create_router(app_state))
}
