//! Shared Module
//!
//! This module contains the wire types exchanged over the HTTP API. They are
//! kept free of server dependencies so a client can deserialize responses
//! with the exact same definitions the server serializes.
//!
//! # Overview
//!
//! - **`auth`** - Request bodies and response payloads for signup, login and
//!   the protected resource
//! - **`error`** - The JSON body returned for every failed request

/// Authentication request and response types
pub mod auth;

/// Error response body
pub mod error;

pub use auth::{
    LoginRequest, MessageResponse, ProtectedResponse, SignupRequest, TokenResponse, UserView,
};
pub use error::ErrorBody;
