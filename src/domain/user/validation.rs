//! User field validation and status parsing

use thiserror::Error;

use super::entity::ImmunisationStatus;
use crate::domain::error::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("First name exceeds maximum length of {0} characters")]
    FirstNameTooLong(usize),

    #[error("Last name cannot be empty")]
    EmptyLastName,

    #[error("Last name exceeds maximum length of {0} characters")]
    LastNameTooLong(usize),

    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email exceeds maximum length of {0} characters")]
    EmailTooLong(usize),

    #[error("Invalid immunisation status: {input}. Valid values are: {valid}")]
    UnknownStatus { input: String, valid: String },
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        match err {
            UserValidationError::UnknownStatus { .. } => {
                DomainError::invalid_argument(err.to_string())
            }
            _ => DomainError::validation(err.to_string()),
        }
    }
}

const MAX_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 255;

/// Validate a first name
///
/// Rules:
/// - Cannot be empty
/// - Maximum 100 characters
pub fn validate_first_name(first_name: &str) -> Result<(), UserValidationError> {
    if first_name.is_empty() {
        return Err(UserValidationError::EmptyFirstName);
    }

    if first_name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::FirstNameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a last name
///
/// Rules:
/// - Cannot be empty
/// - Maximum 100 characters
pub fn validate_last_name(last_name: &str) -> Result<(), UserValidationError> {
    if last_name.is_empty() {
        return Err(UserValidationError::EmptyLastName);
    }

    if last_name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::LastNameTooLong(MAX_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Cannot be empty
/// - Maximum 255 characters
///
/// No format check; uniqueness is enforced by the repository.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    Ok(())
}

/// Parse a free-text status into the enumerated value.
///
/// Matches the status names case-insensitively. Anything else is rejected
/// with a message listing the valid names; callers must not fall back to a
/// default status.
pub fn parse_status(input: &str) -> Result<ImmunisationStatus, UserValidationError> {
    ImmunisationStatus::ALL
        .iter()
        .find(|status| status.as_str().eq_ignore_ascii_case(input))
        .copied()
        .ok_or_else(|| UserValidationError::UnknownStatus {
            input: input.to_string(),
            valid: ImmunisationStatus::ALL
                .iter()
                .map(|status| status.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Name tests
    #[test]
    fn test_valid_names() {
        assert!(validate_first_name("John").is_ok());
        assert!(validate_last_name("O'Brien-Smith").is_ok());
        assert!(validate_first_name(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_empty_first_name() {
        assert_eq!(
            validate_first_name(""),
            Err(UserValidationError::EmptyFirstName)
        );
    }

    #[test]
    fn test_first_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_first_name(&long_name),
            Err(UserValidationError::FirstNameTooLong(100))
        );
    }

    #[test]
    fn test_empty_last_name() {
        assert_eq!(
            validate_last_name(""),
            Err(UserValidationError::EmptyLastName)
        );
    }

    #[test]
    fn test_last_name_too_long() {
        let long_name = "b".repeat(101);
        assert_eq!(
            validate_last_name(&long_name),
            Err(UserValidationError::LastNameTooLong(100))
        );
    }

    // Email tests
    #[test]
    fn test_valid_emails() {
        assert!(validate_email("john.doe@example.com").is_ok());
        // No format check, only presence and length
        assert!(validate_email("not-an-email").is_ok());
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(UserValidationError::EmptyEmail));
    }

    #[test]
    fn test_email_too_long() {
        let long_email = "a".repeat(256);
        assert_eq!(
            validate_email(&long_email),
            Err(UserValidationError::EmailTooLong(255))
        );
    }

    // Status parsing tests
    #[test]
    fn test_parse_status_exact() {
        assert_eq!(
            parse_status("FullyImmunised"),
            Ok(ImmunisationStatus::FullyImmunised)
        );
        assert_eq!(
            parse_status("Overdue"),
            Ok(ImmunisationStatus::Overdue)
        );
    }

    #[test]
    fn test_parse_status_case_insensitive() {
        assert_eq!(
            parse_status("fullyimmunised"),
            Ok(ImmunisationStatus::FullyImmunised)
        );
        assert_eq!(
            parse_status("PARTIALLYIMMUNISED"),
            Ok(ImmunisationStatus::PartiallyImmunised)
        );
        assert_eq!(
            parse_status("nonimmunised"),
            Ok(ImmunisationStatus::NonImmunised)
        );
        assert_eq!(parse_status("oVeRdUe"), Ok(ImmunisationStatus::Overdue));
    }

    #[test]
    fn test_parse_status_unknown() {
        let err = parse_status("BananaStatus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid immunisation status: BananaStatus. Valid values are: \
             NonImmunised, PartiallyImmunised, FullyImmunised, Overdue"
        );
    }

    #[test]
    fn test_parse_status_rejects_empty_and_whitespace() {
        assert!(parse_status("").is_err());
        assert!(parse_status(" FullyImmunised ").is_err());
    }

    #[test]
    fn test_unknown_status_maps_to_invalid_argument() {
        let err: DomainError = parse_status("Banana").unwrap_err().into();
        assert!(matches!(err, DomainError::InvalidArgument { .. }));
    }

    #[test]
    fn test_field_errors_map_to_validation() {
        let err: DomainError = validate_email("").unwrap_err().into();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
