//! Signup and login flows
//!
//! Both flows are linear pipelines over the repository, the password hasher
//! and the token signer: each stage either proceeds or terminates with a
//! final [`AuthOutcome`]. No retries; the single insert is the only mutating
//! step.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::config::AuthConfig;
use crate::domain::user::{validate_candidate, Candidate, NewUser, User, UserRepository};
use crate::domain::{AuthOutcome, DomainError};
use crate::infrastructure::auth::jwt::{self, SessionClaims, DEFAULT_SESSION_TTL_HOURS};

use super::password::PasswordHasher;

/// Default bound on each store operation
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Authentication service: signup and login over a document store
#[derive(Debug)]
pub struct AuthService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
    store_timeout: Duration,
    token_ttl_hours: u64,
}

impl<R: UserRepository, H: PasswordHasher> AuthService<R, H> {
    /// Create a new auth service with default timeouts
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self {
            repository,
            hasher,
            store_timeout: DEFAULT_STORE_TIMEOUT,
            token_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
        }
    }

    /// Build a service parameterized by the ambient configuration
    pub fn from_config(repository: Arc<R>, hasher: Arc<H>, config: &AuthConfig) -> Self {
        Self::new(repository, hasher)
            .with_store_timeout(Duration::from_secs(config.store_timeout_secs))
            .with_token_ttl_hours(config.token_ttl_hours)
    }

    /// Override the per-operation store deadline
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Override the session token lifetime
    pub fn with_token_ttl_hours(mut self, hours: u64) -> Self {
        self.token_ttl_hours = hours;
        self
    }

    /// Register a new user
    ///
    /// Validates the candidate, checks for an existing user by email, hashes
    /// the password and inserts the record. The plaintext password is never
    /// persisted. A lookup failure or a hashing failure fails closed with a
    /// 500 outcome; a duplicate detected at insert is reported as 409, which
    /// covers the race where two signups pass the existence check together.
    #[instrument(skip(self, candidate), fields(email = %candidate.email))]
    pub async fn signup(&self, candidate: Candidate) -> AuthOutcome {
        if let Err(e) = validate_candidate(&candidate) {
            debug!("signup rejected: {}", e);
            return AuthOutcome::failure("Invalid Input", &DomainError::validation(e.to_string()));
        }

        match self.find_by_email(&candidate.email).await {
            Ok(Some(_)) => {
                return AuthOutcome::failure(
                    "User already exists",
                    &DomainError::conflict(format!(
                        "user with email '{}' already exists",
                        candidate.email
                    )),
                );
            }
            Ok(None) => {}
            Err(e) => {
                warn!("signup existence check failed: {}", e);
                return AuthOutcome::failure("Internal Server Error", &e);
            }
        }

        let password_hash = match self.hasher.hash(&candidate.password) {
            Ok(hash) => hash,
            Err(e) => {
                warn!("password hashing failed: {}", e);
                return AuthOutcome::failure("Error creating new user", &e);
            }
        };

        let new_user = NewUser::new(candidate.name, candidate.email, password_hash);

        match self.insert(new_user).await {
            Ok(user) => {
                debug!(user_id = %user.id(), "created new user");
                AuthOutcome::success("Successfully created new user")
            }
            Err(e @ DomainError::Conflict { .. }) => {
                // Lost the race against a concurrent signup; the store-level
                // uniqueness check is authoritative.
                AuthOutcome::failure("User already exists", &e)
            }
            Err(e) => {
                warn!("user insert failed: {}", e);
                AuthOutcome::failure("Error creating new user", &e)
            }
        }
    }

    /// Authenticate a user and issue a session token
    ///
    /// Rejects before touching the store when the signing secret is empty.
    /// Password mismatch and a malformed stored hash produce the same
    /// outcome, so callers learn nothing about which one occurred.
    #[instrument(skip(self, candidate, signing_secret), fields(email = %candidate.email))]
    pub async fn login(&self, candidate: Candidate, signing_secret: &str) -> AuthOutcome {
        if signing_secret.is_empty() {
            warn!("login attempted without a signing secret configured");
            return AuthOutcome::failure(
                "Invalid SECRET_KEY",
                &DomainError::configuration("signing secret is not set"),
            );
        }

        if let Err(e) = validate_candidate(&candidate) {
            debug!("login rejected: {}", e);
            return AuthOutcome::failure("Invalid input", &DomainError::validation(e.to_string()));
        }

        let user = match self.find_by_email(&candidate.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                return AuthOutcome::failure(
                    "No user found",
                    &DomainError::not_found(format!(
                        "no user with email '{}'",
                        candidate.email
                    )),
                );
            }
            Err(e) => {
                warn!("login lookup failed: {}", e);
                return AuthOutcome::failure("Internal Server Error", &e);
            }
        };

        if !self.hasher.verify(&candidate.password, user.password_hash()) {
            return AuthOutcome::failure(
                "Invalid email/password",
                &DomainError::credential("email/password mismatch"),
            );
        }

        let claims = SessionClaims::new(&user, self.token_ttl_hours);

        match jwt::sign(&claims, signing_secret) {
            Ok(token) => {
                debug!(user_id = %user.id(), "issued session token");
                AuthOutcome::success_with_token("User found", token)
            }
            Err(e) => {
                warn!("token signing failed: {}", e);
                AuthOutcome::failure("Internal server error", &e)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        match tokio::time::timeout(self.store_timeout, self.repository.find_by_email(email)).await
        {
            Ok(result) => result,
            Err(_) => Err(DomainError::storage(format!(
                "lookup timed out after {:?}",
                self.store_timeout
            ))),
        }
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, DomainError> {
        match tokio::time::timeout(self.store_timeout, self.repository.insert(new_user)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::storage(format!(
                "insert timed out after {:?}",
                self.store_timeout
            ))),
        }
    }
}
