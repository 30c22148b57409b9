//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewUser, User};
use crate::domain::DomainError;

/// Repository trait over the backing document store
///
/// `find_by_email` distinguishes "no matching document" (`Ok(None)`) from
/// store failures (`Err`); the flows branch on that distinction.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Look up a user by email, the unique business key
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert a new user, assigning its identity on success
    ///
    /// Implementations that enforce email uniqueness return
    /// `DomainError::Conflict` for a duplicate; callers treat that as the
    /// authoritative duplicate signal.
    async fn insert(&self, new_user: NewUser) -> Result<User, DomainError>;
}
