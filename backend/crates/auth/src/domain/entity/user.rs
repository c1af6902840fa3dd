//! User Entity
//!
//! A user is either fresh (validated, not yet stored, no id) or hydrated
//! (loaded from storage, id assigned by the store). The two states are
//! separate types so an id can never be read before it exists.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_object::{
    UserId, avatar::AvatarUrl, email::Email, user_name::UserName, user_password::UserPassword,
};

/// Validated registration data waiting to be stored
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password: UserPassword,
}

impl NewUser {
    pub fn new(user_name: UserName, email: Email, password: UserPassword) -> Self {
        Self {
            user_name,
            email,
            password,
        }
    }
}

/// Stored user
///
/// The avatar is derived once at hydration.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub user_id: UserId,
    /// Lowercase user name (unique)
    pub user_name: UserName,
    /// Lowercase email (unique)
    pub email: Email,
    /// Password hash
    pub password: UserPassword,
    pub avatar: AvatarUrl,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user from stored fields
    pub fn hydrate(
        user_id: UserId,
        user_name: UserName,
        email: Email,
        password: UserPassword,
        created_at: DateTime<Utc>,
    ) -> Self {
        let avatar = AvatarUrl::for_email(&email);
        Self {
            user_id,
            user_name,
            email,
            password,
            avatar,
            created_at,
        }
    }

    /// Store a fresh user under the given id
    pub fn from_new(user_id: UserId, new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        Self::hydrate(
            user_id,
            new_user.user_name,
            new_user.email,
            new_user.password,
            created_at,
        )
    }

    /// Public view: no email, no hash
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.user_id,
            username: self.user_name.as_str().to_string(),
            avatar_url: self.avatar.as_str().to_string(),
        }
    }
}

/// Public identity of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub id: UserId,
    pub username: String,
    pub avatar_url: String,
}
