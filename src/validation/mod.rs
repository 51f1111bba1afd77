//! Input-Shape Validation
//!
//! Precondition checks handlers run before the core executes. These only
//! reject malformed input shape; they never consult the store, so a failed
//! check reveals nothing about existing accounts.
//!
//! The password policy applies to new passwords at signup: at least 8
//! characters with one uppercase letter, one lowercase letter, one digit, and
//! one symbol. Signin only requires a non-empty password, since the stored
//! hash is the arbiter there.

use crate::error::ApiError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn validation_error(field: &'static str, message: impl Into<String>) -> ApiError {
    ApiError::Validation {
        field,
        message: message.into(),
    }
}

/// Check that a string is shaped like an email address
///
/// Deliberately loose: one `@` with a non-empty local part and a domain part
/// containing a dot. Deliverability is the mail system's problem.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(validation_error("email", "Invalid email format"))
    }
}

/// Check a new password against the complexity policy
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

    if long_enough && has_uppercase && has_lowercase && has_digit && has_symbol {
        Ok(())
    } else {
        Err(validation_error(
            "password",
            format!(
                "Password must contain at least {MIN_PASSWORD_LENGTH} characters, \
                 1 uppercase, 1 lowercase, 1 number and 1 special character"
            ),
        ))
    }
}

/// Reject empty or whitespace-only fields
pub fn validate_not_empty(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(validation_error(field, format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_emails() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a@").is_err());
        assert!(validate_email("a@nodot").is_err());
        assert!(validate_email("a@.com").is_err());
    }

    #[test]
    fn accepts_policy_conforming_passwords() {
        assert!(validate_password("Abcdef1!").is_ok());
        assert!(validate_password("long-Enough-Pa55word").is_ok());
    }

    #[test]
    fn rejects_policy_violations() {
        // too short
        assert!(validate_password("Ab1!").is_err());
        // missing uppercase
        assert!(validate_password("abcdef1!").is_err());
        // missing lowercase
        assert!(validate_password("ABCDEF1!").is_err());
        // missing digit
        assert!(validate_password("Abcdefg!").is_err());
        // missing symbol
        assert!(validate_password("Abcdefg1").is_err());
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(validate_not_empty("password", "").is_err());
        assert!(validate_not_empty("password", "   ").is_err());
        assert!(validate_not_empty("password", "x").is_ok());
    }
}
