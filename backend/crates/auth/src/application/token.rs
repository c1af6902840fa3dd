//! Bearer Tokens
//!
//! HS256-signed tokens carrying the user id. Verification fails closed:
//! any decoding problem is `AuthError::InvalidToken`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::TokenClaims;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Signed token and its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies bearer tokens
#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token valid from now
    pub fn issue(&self, user_id: UserId) -> AuthResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if signed at `issued_at`
    pub fn issue_at(&self, user_id: UserId, issued_at: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = issued_at.timestamp();
        let exp = iat + self.config.token_ttl.as_secs() as i64;
        let claims = TokenClaims {
            id: user_id,
            iat,
            exp,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.config.token_secret),
        )
        .map_err(|e| AuthError::Internal(format!("Token signing failed: {e}")))?;

        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature and expiry, returning the user id
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(&self.config.token_secret),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            AuthError::InvalidToken
        })?;

        Ok(data.claims.id)
    }
}
