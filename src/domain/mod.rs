//! Domain layer - Core business logic and entities

pub mod error;
pub mod outcome;
pub mod user;

pub use error::DomainError;
pub use outcome::AuthOutcome;
pub use user::{
    validate_candidate, Candidate, NewUser, User, UserId, UserRepository, UserValidationError,
};
