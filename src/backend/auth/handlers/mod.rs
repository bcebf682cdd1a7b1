//! Authentication Handlers Module
//!
//! HTTP handlers for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Handler exports
//! ├── json.rs       - Strict JSON body extractor
//! ├── signup.rs     - POST /signup
//! ├── login.rs      - POST /login
//! ├── protected.rs  - GET /protected
//! └── user.rs       - GET /user
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → public view returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected**: token → verified → user returned

/// Strict JSON body extractor
pub mod json;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Protected resource handler
pub mod protected;

/// Hello endpoint
pub mod user;

pub use json::ValidJson;
pub use login::login;
pub use protected::protected;
pub use signup::signup;
pub use user::user_hello;
