//! User Name Value Object
//!
//! The user name is the public handle: it is used to sign in, in profile
//! URLs, and in follower lists.
//!
//! ## Rules
//! - Surrounding whitespace is trimmed and the name is lowercased; the
//!   lowercase form is the only form that is stored or queried
//! - ASCII letters and digits only
//! - Length: 3 to 30 characters

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
///
/// The display strings are the messages shown to people registering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("You must provide a username.")]
    Empty,

    #[error("Username can only contain letters and numbers.")]
    NotAlphanumeric,

    #[error("Username must have {min} or more characters.")]
    TooShort { length: usize, min: usize },

    #[error("Username cannot exceed {max} characters.")]
    TooLong { length: usize, max: usize },
}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated, normalized (lowercase) user name
///
/// # Invariants
/// - Non-empty
/// - ASCII alphanumeric only
/// - Length between USER_NAME_MIN_LENGTH and USER_NAME_MAX_LENGTH
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Normalize and validate raw input
    ///
    /// Reports the first failing rule; use [`UserName::check_charset`] and
    /// [`UserName::check_length`] to collect rules separately.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let canonical = Self::normalize(input.as_ref());
        Self::check_charset(&canonical)?;
        Self::check_length(&canonical)?;
        Ok(Self(canonical))
    }

    /// Trim and lowercase
    pub fn normalize(input: &str) -> String {
        input.trim().to_lowercase()
    }

    /// Presence and character-set rules on a normalized name
    pub fn check_charset(canonical: &str) -> Result<(), UserNameError> {
        if canonical.is_empty() {
            return Err(UserNameError::Empty);
        }
        if !canonical.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NotAlphanumeric);
        }
        Ok(())
    }

    /// Length rules on a normalized name. An empty name is a presence
    /// failure, not a length failure, so it passes here.
    pub fn check_length(canonical: &str) -> Result<(), UserNameError> {
        let length = canonical.chars().count();
        if length > 0 && length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }
        Ok(())
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(stored: impl Into<String>) -> Self {
        Self(stored.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================
