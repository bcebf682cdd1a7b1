//! Error Response Body
//!
//! Every failed request is answered with the same JSON shape: a human-readable
//! `msg` and the numeric HTTP `status` that was sent with it.
//!
//! ```json
//! { "msg": "bad credentials", "status": 400 }
//! ```
use serde::{Deserialize, Serialize};

/// JSON body of an error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable description, safe to show to end users
    pub msg: String,
    /// HTTP status code of the response
    pub status: u16,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>, status: u16) -> Self {
        Self {
            msg: msg.into(),
            status,
        }
    }
}
