//! Outcome type returned by the signup and login flows
//!
//! Every internal failure is translated into an `AuthOutcome` at the flow
//! boundary; nothing propagates to the caller as an unhandled error. The
//! serialized shape is `{status, msg, err|null, data|null}`.

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Result of a signup or login attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// HTTP-style status code (200, 400, 404, 409, 500)
    pub status: u16,
    /// Human-readable message
    pub msg: String,
    /// Rendered error detail (kind prefix + message), if any
    pub err: Option<String>,
    /// Session token, present only on successful login
    pub data: Option<String>,
}

impl AuthOutcome {
    /// Successful outcome without a token (signup)
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            status: 200,
            msg: msg.into(),
            err: None,
            data: None,
        }
    }

    /// Successful outcome carrying a session token (login)
    pub fn success_with_token(msg: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            status: 200,
            msg: msg.into(),
            err: None,
            data: Some(token.into()),
        }
    }

    /// Failed outcome; the status code is derived from the error kind
    pub fn failure(msg: impl Into<String>, error: &DomainError) -> Self {
        Self {
            status: error.status_code(),
            msg: msg.into(),
            err: Some(error.to_string()),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Session token, if one was issued
    pub fn token(&self) -> Option<&str> {
        self.data.as_deref()
    }
}
