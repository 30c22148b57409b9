//! Session token signing and verification
//!
//! Compact JWS tokens signed with HMAC-SHA256. The signing secret is supplied
//! by the caller per invocation; loading it from the environment is the
//! config layer's job, performed once at startup.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::domain::DomainError;

/// Default session lifetime in hours
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 24;

/// Claims embedded in a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Email
    pub email: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Create new claims for a persisted user
    ///
    /// An absurdly large ttl saturates at the maximum representable expiry
    /// instead of wrapping or panicking.
    pub fn new(user: &User, ttl_hours: u64) -> Self {
        let now = Utc::now();
        let ttl = i64::try_from(ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .unwrap_or(Duration::MAX);
        let exp = now
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            sub: user.id().as_str().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Get the user ID from claims
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// Sign claims into a compact token (HS256)
pub fn sign(claims: &SessionClaims, secret: &str) -> Result<String, DomainError> {
    if secret.is_empty() {
        return Err(DomainError::configuration("signing secret is empty"));
    }

    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| DomainError::signing(format!("Failed to sign session token: {}", e)))
}

/// Verify a token's signature and expiry and return its claims
pub fn verify(token: &str, secret: &str) -> Result<SessionClaims, DomainError> {
    let validation = Validation::default();

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| DomainError::credential(format!("Invalid session token: {}", e)))?;

    Ok(token_data.claims)
}
