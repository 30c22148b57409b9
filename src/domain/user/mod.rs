//! User domain
//!
//! This module provides domain types and traits for user authentication,
//! including the candidate/user entities, validation, and the repository
//! trait over the backing document store.

mod entity;
mod repository;
mod validation;

pub use entity::{Candidate, NewUser, User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_candidate, validate_email, validate_name, validate_password, UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
