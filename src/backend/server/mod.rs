//! Server Module
//!
//! Startup and shared state for the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig loaded from the environment
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Database setup and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: connect and run migrations
//! 3. **State Creation**: `AppState::new` builds the store, hasher and issuer
//! 4. **Router Creation**: routes and middleware layers

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, JwtConfig, ServerConfig};
pub use init::{connect_database, connect_in_memory, create_app, InitError};
pub use state::AppState;
