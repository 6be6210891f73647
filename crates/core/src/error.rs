//! Domain error model.

use thiserror::Error;

/// Result type used across the contact book.
pub type ContactResult<T> = Result<T, ContactError>;

/// A field value or phone edit was rejected.
///
/// Each variant carries the raw input that failed; the `Display` output is the
/// message meant for the person typing it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Phone number is not exactly ten ASCII digits.
    #[error("Phone should be 10 digits long")]
    InvalidPhone(String),

    /// Birthday is not a real calendar date in `DD.MM.YYYY` form.
    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate(String),

    /// The phone number to edit is not on the record.
    #[error("Check length and correctness of the numbers")]
    PhoneNotFound(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(raw) | Self::InvalidDate(raw) | Self::PhoneNotFound(raw) => raw,
        }
    }
}

/// Contact-book level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under the given name.
    #[error("contact not found: {0}")]
    KeyNotFound(String),
}

impl ContactError {
    pub fn key_not_found(name: impl Into<String>) -> Self {
        Self::KeyNotFound(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidPhone("123".into()).to_string(),
            "Phone should be 10 digits long"
        );
        assert_eq!(
            ValidationError::InvalidDate("2020-01-01".into()).to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            ValidationError::PhoneNotFound("0000000000".into()).to_string(),
            "Check length and correctness of the numbers"
        );
    }

    #[test]
    fn validation_error_keeps_offending_input() {
        let err = ValidationError::InvalidDate("31.02.2020".into());
        assert_eq!(err.input(), "31.02.2020");
    }

    #[test]
    fn contact_error_wraps_validation_transparently() {
        let err: ContactError = ValidationError::InvalidPhone("abc".into()).into();
        assert_eq!(err.to_string(), "Phone should be 10 digits long");
        assert!(matches!(err, ContactError::Validation(_)));
    }

    #[test]
    fn key_not_found_names_the_missing_contact() {
        assert_eq!(
            ContactError::key_not_found("Jane").to_string(),
            "contact not found: Jane"
        );
    }
}
