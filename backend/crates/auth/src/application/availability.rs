//! Availability Checks
//!
//! Answer "is this user name / email already registered?" for the
//! registration form. Input that could never be registered is reported as
//! not existing, without asking the store.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Availability check use case
pub struct AvailabilityUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> AvailabilityUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn username_exists(&self, candidate: &str) -> AuthResult<bool> {
        match UserName::new(candidate) {
            Ok(user_name) => self.user_repo.exists_by_user_name(&user_name).await,
            Err(_) => Ok(false),
        }
    }

    pub async fn email_exists(&self, candidate: &str) -> AuthResult<bool> {
        match Email::new(candidate) {
            Ok(email) => self.user_repo.exists_by_email(&email).await,
            Err(_) => Ok(false),
        }
    }
}
