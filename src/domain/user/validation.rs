//! Candidate validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::entity::Candidate;

/// Errors that can occur during candidate validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Name is too short. Minimum length is {0} characters")]
    NameTooShort(usize),

    #[error("Name exceeds maximum length of {0} characters")]
    NameTooLong(usize),

    #[error("Email is not a valid email address")]
    InvalidEmail,

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),
}

const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 100;
const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Validate a display name
///
/// Rules:
/// - Minimum 2 characters
/// - Maximum 100 characters
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    let length = name.chars().count();

    if length < MIN_NAME_LENGTH {
        return Err(UserValidationError::NameTooShort(MIN_NAME_LENGTH));
    }

    if length > MAX_NAME_LENGTH {
        return Err(UserValidationError::NameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address shape (local part, '@', domain with a dot)
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a password
///
/// Rules:
/// - Minimum 6 characters
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate a full candidate record
///
/// Runs identically for signup and login: the name is validated even on the
/// login path, where only email and password drive the lookup.
pub fn validate_candidate(candidate: &Candidate) -> Result<(), UserValidationError> {
    validate_name(&candidate.name)?;
    validate_email(&candidate.email)?;
    validate_password(&candidate.password)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Name tests

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Ada Lovelace").is_ok());
        assert!(validate_name("Bo").is_ok());
        assert!(validate_name(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(validate_name("A"), Err(UserValidationError::NameTooShort(2)));
        assert_eq!(validate_name(""), Err(UserValidationError::NameTooShort(2)));
    }

    #[test]
    fn test_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_name(&long_name),
            Err(UserValidationError::NameTooLong(100))
        );
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // Two characters, four bytes
        assert!(validate_name("åß").is_ok());
    }

    // Email tests

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("first.last@sub.domain.org").is_ok());
        assert!(validate_email("user+tag@example.co").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(UserValidationError::InvalidEmail));
        assert_eq!(
            validate_email("no-at-sign"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("@example.com"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("ada@example"),
            Err(UserValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_email("ada @example.com"),
            Err(UserValidationError::InvalidEmail)
        );
    }

    // Password tests

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            validate_password("12345"),
            Err(UserValidationError::PasswordTooShort(6))
        );
    }

    // Candidate tests

    #[test]
    fn test_valid_candidate() {
        let candidate = Candidate::new("Ada Lovelace", "ada@example.com", "secret1");
        assert!(validate_candidate(&candidate).is_ok());
    }

    #[test]
    fn test_candidate_fails_on_first_invalid_field() {
        let candidate = Candidate::new("A", "not-an-email", "123");
        assert_eq!(
            validate_candidate(&candidate),
            Err(UserValidationError::NameTooShort(2))
        );
    }

    #[test]
    fn test_candidate_invalid_email() {
        let candidate = Candidate::new("Ada Lovelace", "not-an-email", "secret1");
        assert_eq!(
            validate_candidate(&candidate),
            Err(UserValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_candidate_invalid_password() {
        let candidate = Candidate::new("Ada Lovelace", "ada@example.com", "12345");
        assert_eq!(
            validate_candidate(&candidate),
            Err(UserValidationError::PasswordTooShort(6))
        );
    }
}
