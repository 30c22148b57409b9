//! User infrastructure module
//!
//! This module provides the concrete pieces of the authentication protocol:
//! password hashing with Argon2, an in-memory repository, and the auth
//! service that runs the signup and login flows.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{AuthService, DEFAULT_STORE_TIMEOUT};
