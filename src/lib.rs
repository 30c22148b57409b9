//! Credo
//!
//! User registration and authentication over a document store:
//! - candidate validation (name, email shape, password length)
//! - Argon2 password hashing and verification
//! - user persistence behind an async repository trait
//! - signed, expiring session tokens (HS256)
//!
//! The two public operations are [`AuthService::signup`] and
//! [`AuthService::login`]; both return an [`AuthOutcome`] and never
//! propagate an internal failure to the caller.
//!
//! ```no_run
//! use std::sync::Arc;
//! use credo::{Argon2Hasher, AuthService, Candidate, InMemoryUserRepository};
//!
//! # async fn demo() {
//! let service = AuthService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(Argon2Hasher::new()),
//! );
//!
//! let signup = service
//!     .signup(Candidate::new("Ada Lovelace", "ada@example.com", "secret1"))
//!     .await;
//! assert_eq!(signup.status, 200);
//!
//! let login = service
//!     .login(
//!         Candidate::new("Ada Lovelace", "ada@example.com", "secret1"),
//!         "signing-secret-from-config",
//!     )
//!     .await;
//! assert!(login.token().is_some());
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{AuthOutcome, Candidate, DomainError, NewUser, User, UserId, UserRepository};
pub use infrastructure::auth::{SessionClaims, DEFAULT_SESSION_TTL_HOURS};
pub use infrastructure::user::{Argon2Hasher, AuthService, InMemoryUserRepository, PasswordHasher};
