//! Session Entities
//!
//! `SessionClaim` is what a caller keeps after signing in. `TokenClaims` is
//! the payload of a signed bearer token.

use serde::{Deserialize, Serialize};

use super::user::UserIdentity;
use crate::domain::value_object::UserId;

/// Signed-in identity handed back after register or login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionClaim {
    pub avatar: String,
    pub username: String,
    pub id: UserId,
}

impl From<&UserIdentity> for SessionClaim {
    fn from(identity: &UserIdentity) -> Self {
        Self {
            avatar: identity.avatar_url.clone(),
            username: identity.username.clone(),
            id: identity.id,
        }
    }
}

/// Bearer token payload
///
/// `iat` and `exp` are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: UserId,
    pub iat: i64,
    pub exp: i64,
}
