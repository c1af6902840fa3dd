//! Find User Use Case
//!
//! Resolves user names and ids to public identities.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Find user use case
pub struct FindUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> FindUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Look up by user name
    ///
    /// A malformed name is `InvalidInput` and never reaches the store.
    pub async fn by_username(&self, candidate: &str) -> AuthResult<User> {
        let user_name = UserName::new(candidate).map_err(|_| AuthError::InvalidInput)?;
        self.user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::NotFound)
    }

    pub async fn by_id(&self, user_id: &UserId) -> AuthResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound)
    }
}
