//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Default bearer token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Auth application configuration
///
/// There is no default: every config is built around an explicit or freshly
/// generated signing key.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for signing bearer tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Bearer token lifetime (1 week)
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Create config with the given signing key
    pub fn with_secret(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Create config with a random signing key (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::with_secret(platform::crypto::random_secret())
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
