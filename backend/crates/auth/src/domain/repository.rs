//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{UserId, email::Email, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
///
/// Keys are always the normalized (lowercase) forms.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Store a fresh user and return it with its assigned id
    ///
    /// A user name or email already present fails with
    /// `AuthError::ValidationFailed` naming the taken field.
    async fn insert(&self, new_user: NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
