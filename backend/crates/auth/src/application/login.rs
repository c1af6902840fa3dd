//! Login Use Case
//!
//! Authenticates a user by user name and password.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenService};
use crate::domain::entity::{session::SessionClaim, user::UserIdentity};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output for browser sessions
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub identity: UserIdentity,
    pub session: SessionClaim,
}

/// Login output for API clients
#[derive(Debug, Clone)]
pub struct TokenLoginOutput {
    pub identity: UserIdentity,
    pub token: IssuedToken,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: TokenService,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens: TokenService::new(config),
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let identity = self.authenticate(input).await?;
        let session = SessionClaim::from(&identity);
        Ok(LoginOutput { identity, session })
    }

    /// Authenticate and issue a bearer token
    pub async fn execute_with_token(&self, input: LoginInput) -> AuthResult<TokenLoginOutput> {
        let identity = self.authenticate(input).await?;
        let token = self.tokens.issue(identity.id)?;
        Ok(TokenLoginOutput { identity, token })
    }

    async fn authenticate(&self, input: LoginInput) -> AuthResult<UserIdentity> {
        // A name that could never have been registered cannot match
        let user_name =
            UserName::new(&input.username).map_err(|_| AuthError::AuthenticationFailed)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let raw_password = RawPassword::new(input.password);
        if !user.password.verify(&raw_password) {
            return Err(AuthError::AuthenticationFailed);
        }

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(user.identity())
    }
}
