//! Avatar URL Value Object
//!
//! Avatars come from the public avatar service, keyed by a digest of the
//! normalized email address.

use super::email::Email;
use platform::crypto::md5_hex;
use serde::Serialize;
use std::fmt;

/// Host serving avatar images
pub const AVATAR_HOST: &str = "gravatar.com";

/// Requested image size in pixels
pub const AVATAR_SIZE: u32 = 128;

/// Derived avatar URL; never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvatarUrl(String);

impl AvatarUrl {
    /// Derive the avatar URL for an email address
    ///
    /// The address is trimmed and lowercased again before hashing, so values
    /// loaded from storage hash the same way as freshly validated ones.
    pub fn for_email(email: &Email) -> Self {
        let canonical = Email::normalize(email.as_str());
        let digest = md5_hex(canonical.as_bytes());
        Self(format!(
            "https://{AVATAR_HOST}/avatar/{digest}?s={AVATAR_SIZE}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AvatarUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
