//! Backend Error Module
//!
//! Error kinds returned by HTTP handlers and their conversion to JSON
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and AuthFailure
//! └── conversion.rs - IntoResponse for ApiError
//! ```
//!
//! Lower layers keep their own error enums (`StoreError`, `PasswordError`,
//! `TokenError`); `From` impls fold them into `ApiError` so handlers can use
//! `?` throughout.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, AuthFailure, BAD_CREDENTIALS};
