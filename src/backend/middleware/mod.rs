//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token validation for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::middleware::auth_middleware;
//! use authgate::backend::server::AppState;
//! use axum::{middleware, routing::get, Router};
//!
//! # fn example(state: AppState) -> Router<AppState> {
//! Router::new()
//!     .route("/protected", get(|| async { "ok" }))
//!     .route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
