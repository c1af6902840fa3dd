//! Email Value Object
//!
//! Represents a syntactically valid email address.
//! Addresses are trimmed and lowercased before they are checked or stored.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Printable symbols allowed in an atom besides letters and digits
const ATEXT_SYMBOLS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Error returned when an email address is rejected
///
/// Every variant renders the same message: registration only tells the
/// person that the address is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("You must provide a valid email address.")]
    Empty,

    #[error("You must provide a valid email address.")]
    TooLong,

    #[error("You must provide a valid email address.")]
    InvalidFormat,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = Self::normalize(email.as_ref());

        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }

        if !Self::is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    /// Trim and lowercase
    pub fn normalize(input: &str) -> String {
        input.trim().to_lowercase()
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        // Must contain exactly one @
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if domain.contains('@') {
            return false;
        }

        if local.len() > LOCAL_PART_MAX_LENGTH || !Self::is_dot_atom(local) {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Every label must be non-empty and not hyphen-delimited
        domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
    }

    /// RFC 5322 dot-atom: runs of atext separated by single dots
    fn is_dot_atom(local: &str) -> bool {
        local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || ATEXT_SYMBOLS.contains(c))
        })
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("User@Example.COM").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("  a@x.com  ").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
        assert_eq!(Email::new("   "), Err(EmailError::Empty));
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@.example.com").is_err());
        assert!(Email::new("user@example..com").is_err());
        assert!(Email::new("user@-example.com").is_err());
        assert!(Email::new("us er@example.com").is_err());
        assert!(Email::new("user@exa_mple.com").is_err());
    }

    #[test]
    fn test_local_part_allows_atext() {
        assert!(Email::new("o'brien@example.com").is_ok());
        assert!(Email::new("a.b.c@example.com").is_ok());
        assert!(Email::new("x_y-z!#$%&*/=?^`{|}~@example.com").is_ok());
    }

    #[test]
    fn test_local_part_rejects_misplaced_dots() {
        assert_eq!(Email::new("a..b@x.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new(".a@x.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("a.@x.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new(".@x.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_local_part_rejects_specials() {
        for email in [
            "a(b)@x.com",
            "a<b>@x.com",
            "a,b@x.com",
            "a\"b@x.com",
            "a;b@x.com",
            "a:b@x.com",
            "a[b]@x.com",
            "a\\b@x.com",
            "\"ab\"@x.com",
            "j\u{f6}rg@x.com",
        ] {
            assert!(Email::new(email).is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_email_too_long() {
        let local = "a".repeat(LOCAL_PART_MAX_LENGTH);
        let domain = format!("{}.com", "b".repeat(EMAIL_MAX_LENGTH));
        assert_eq!(
            Email::new(format!("{local}@{domain}")),
            Err(EmailError::TooLong)
        );
        assert!(Email::new(format!("{}@x.com", "a".repeat(65))).is_err());
    }

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_every_failure_has_one_message() {
        for err in [EmailError::Empty, EmailError::TooLong, EmailError::InvalidFormat] {
            assert_eq!(err.to_string(), "You must provide a valid email address.");
        }
    }
}
