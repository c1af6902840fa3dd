//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. The raw password is never
//! trimmed or case-folded: what the person typed is what gets hashed.
//!
//! ## Usage
//! ```rust,ignore
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("a-long-enough-pass".to_string());
//! raw.check_policy()?;
//! let hashed = UserPassword::from_raw(&raw)?;
//! assert!(hashed.verify(&raw));
//! ```

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    pub fn new(raw: String) -> Self {
        Self(ClearTextPassword::new(raw))
    }

    /// Length rules: present, at least 12 and at most 50 characters
    pub fn check_policy(&self) -> Result<(), PasswordPolicyError> {
        self.0.check_policy()
    }

    pub(crate) fn as_clear_text(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword([REDACTED])")
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Salted one-way hash of a password
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword) -> Result<Self, PasswordHashError> {
        raw.as_clear_text().hash().map(Self)
    }

    /// Rebuild from a stored PHC string
    pub fn from_phc_string(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc).map(Self)
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time check of a candidate password
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.as_clear_text())
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword([HASH])")
    }
}
