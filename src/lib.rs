//! authgate - Main Library
//!
//! A small authentication service: users sign up with an email and
//! password, log in to receive a signed token, and present that token to
//! reach protected endpoints.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types for requests, responses and errors
//! - **`backend`** - Axum server, SQLite user store, bcrypt hashing,
//!   JWT issuing and verification
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - Each layer has its own `thiserror` enum (`StoreError`, `TokenError`,
//!   `PasswordError`, `ConfigError`)
//! - Handlers return `ApiError`, which renders as a JSON `{msg, status}` body

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
