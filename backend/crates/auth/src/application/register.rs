//! Register Use Case
//!
//! Validates credentials, hashes the password and stores the new user.

use std::sync::Arc;

use crate::domain::entity::{
    session::SessionClaim,
    user::{NewUser, UserIdentity},
};
use crate::domain::repository::UserRepository;
use crate::domain::services::{CredentialValidator, RegistrationInput};
use crate::domain::value_object::user_password::UserPassword;
use crate::error::{AuthError, AuthResult};

/// Register output
#[derive(Debug, Clone)]
pub struct RegisterOutput {
    pub identity: UserIdentity,
    pub session: SessionClaim,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    validator: CredentialValidator<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self {
            validator: CredentialValidator::new(user_repo.clone()),
            user_repo,
        }
    }

    pub async fn execute(&self, input: RegistrationInput) -> AuthResult<RegisterOutput> {
        let report = self.validator.validate(input).await?;
        let credentials = report.into_valid().map_err(AuthError::ValidationFailed)?;

        let password = UserPassword::from_raw(&credentials.password)?;
        let new_user = NewUser::new(credentials.user_name, credentials.email, password);

        // Uniqueness may still be lost to a concurrent registration here;
        // the store's constraints decide and report it the same way.
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        let identity = user.identity();
        let session = SessionClaim::from(&identity);
        Ok(RegisterOutput { identity, session })
    }
}
