use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::UserError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Login identifier, stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, UserError> {
        let normalized = raw.trim().to_lowercase();
        if !EMAIL.as_ref().is_some_and(|re| re.is_match(&normalized)) {
            return Err(UserError::InvalidEmail);
        }
        Ok(Self(normalized))
    }

    /// Wraps a value read back from storage.
    pub fn from_repository(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn validate_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_email() {
        let email = Email::parse("  Jane.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "jane.doe@example.com");
    }

    #[test]
    fn should_reject_malformed_email() {
        for raw in ["", "jane", "jane@", "@example.com", "jane doe@example.com"] {
            assert!(
                matches!(Email::parse(raw), Err(UserError::InvalidEmail)),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn should_require_minimum_password_length() {
        assert!(matches!(
            validate_password("short"),
            Err(UserError::PasswordTooShort)
        ));
        assert!(validate_password("long-enough").is_ok());
    }
}
