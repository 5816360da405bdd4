//! Validated student email addresses.
//!
//! Participants are identified solely by email, so every address that enters
//! the catalog goes through [`Email::parse`] first. The check is deliberately
//! basic: a local part, an `@`, and a domain containing a dot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ActivityError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern is a valid regex")
});

/// An email address that passed format validation.
///
/// Serializes as a plain string and re-validates when deserialized.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validates `value` and wraps it.
    ///
    /// # Example
    /// ```
    /// use mergington::email::Email;
    ///
    /// let email = Email::parse("michael@mergington.edu").unwrap();
    /// assert_eq!(email.as_str(), "michael@mergington.edu");
    /// assert!(Email::parse("michael").is_err());
    /// ```
    pub fn parse(value: impl Into<String>) -> Result<Self, ActivityError> {
        let value = value.into();
        if EMAIL_PATTERN.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(ActivityError::InvalidEmail(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ActivityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Email {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_school_addresses() {
        for value in [
            "michael@mergington.edu",
            "new.student@mergington.edu",
            "first-last@mail.mergington.edu",
            "student_42@example.org",
        ] {
            assert!(Email::parse(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for value in [
            "",
            "invalid-email",
            "@mergington.edu",
            "student@",
            "student@mergington",
            "student@mergington.",
            "two words@mergington.edu",
            "student@@mergington.edu",
        ] {
            let err = Email::parse(value).unwrap_err();
            assert_eq!(err, ActivityError::InvalidEmail(value.to_string()));
        }
    }

    #[test]
    fn test_display_is_raw_value() {
        let email = Email::parse("emma@mergington.edu").unwrap();
        assert_eq!(email.to_string(), "emma@mergington.edu");
        assert_eq!(email, "emma@mergington.edu");
    }

    #[test]
    fn test_serde() {
        let original = Email::parse("sophia@mergington.edu").unwrap();

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, "\"sophia@mergington.edu\"");

        let deserialized: Email = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);

        assert!(serde_json::from_str::<Email>("\"not-an-email\"").is_err());
    }
}
