//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint handlers
//! ```
//!
//! # Routes
//!
//! - `POST /signup` - User registration
//! - `POST /login` - User login, returns a token
//! - `GET /protected` - Current user (requires `Authorization: Bearer <token>`)
//! - `GET /user` - Hello endpoint
//!
//! Unknown paths answer `404` with a JSON `{msg, status}` body.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
