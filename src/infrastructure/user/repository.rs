//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Keyed by email, the unique business key. Email uniqueness is enforced at
/// insert, which makes the insert-conflict the authoritative duplicate signal
/// even when two concurrent signups pass the flow-level existence check.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut map = HashMap::new();

        for user in users {
            map.insert(user.email().to_string(), user);
        }

        Self {
            users: Arc::new(RwLock::new(map)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&new_user.email) {
            return Err(DomainError::conflict(format!(
                "user with email '{}' already exists",
                new_user.email
            )));
        }

        let id = UserId::new(Uuid::new_v4().to_string());
        let user = User::new(id, new_user.name, new_user.email.clone(), new_user.password_hash);

        users.insert(new_user.email, user.clone());

        Ok(user)
    }
}
