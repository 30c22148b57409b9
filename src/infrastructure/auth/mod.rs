//! Session token infrastructure

pub mod jwt;

pub use jwt::{sign, verify, SessionClaims, DEFAULT_SESSION_TTL_HOURS};
