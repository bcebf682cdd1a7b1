//! Database migration tests
//!
//! Tests to ensure migrations run correctly and the users schema enforces
//! unique, case-insensitive emails.

use authgate::backend::server::{connect_database, connect_in_memory};
use uuid::Uuid;

async fn insert_user(pool: &sqlx::SqlitePool, email: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, 'hash', ?)",
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .map(|_| ())
}

#[tokio::test]
async fn test_users_table_exists() {
    let pool = connect_in_memory().await.unwrap();

    let result = sqlx::query("SELECT 1 FROM users LIMIT 1")
        .execute(&pool)
        .await;

    assert!(result.is_ok(), "Users table should exist");
}

#[tokio::test]
async fn test_email_unique_ignoring_case() {
    let pool = connect_in_memory().await.unwrap();

    insert_user(&pool, "test@example.com").await.unwrap();
    let err = insert_user(&pool, "Test@Example.com").await.unwrap_err();

    let is_unique = err
        .as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false);
    assert!(is_unique, "expected unique violation, got {:?}", err);
}

#[tokio::test]
async fn test_file_database_is_created_and_reopened() {
    let path = std::env::temp_dir().join(format!("authgate-test-{}.db", Uuid::new_v4()));
    let url = format!("sqlite://{}", path.display());

    let pool = connect_database(&url).await.unwrap();
    insert_user(&pool, "persist@example.com").await.unwrap();
    pool.close().await;

    // Migrations must be idempotent across restarts
    let pool = connect_database(&url).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
    pool.close().await;

    let _ = std::fs::remove_file(&path);
}
