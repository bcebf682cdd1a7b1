//! Authentication Module
//!
//! User registration, login and token-protected access.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and UserStore
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - Token issuing and validation
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs; there is no revocation list, a token
//!   stays valid until `exp`
//! - Failed logins never reveal whether the email exists

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, protected, signup, user_hello};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{Claims, TokenError, TokenIssuer};
pub use users::{StoreError, User, UserStore};
