//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    AvailabilityUseCase, FindUserUseCase, LoginInput, LoginUseCase, RegisterUseCase, TokenService,
};
use crate::domain::entity::{session::SessionClaim, user::UserIdentity};
use crate::domain::repository::UserRepository;
use crate::domain::services::RegistrationInput;
use crate::error::AuthResult;
use crate::presentation::dto::{
    EmailAvailabilityRequest, LoginRequest, RegisterRequest, TokenResponse, UsernameAvailabilityRequest,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: TokenService,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let config = Arc::new(config);
        Self {
            repo: Arc::new(repo),
            tokens: TokenService::new(config.clone()),
            config,
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<SessionClaim>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let input = RegistrationInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(output.session)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<SessionClaim>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(output.session))
}

/// POST /api/login
pub async fn api_login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute_with_token(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(TokenResponse {
        token: output.token.token,
        expires_at: output.token.expires_at,
        user: output.identity,
    }))
}

// ============================================================================
// Availability checks
// ============================================================================

/// POST /doesUsernameExist
pub async fn username_exists<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<UsernameAvailabilityRequest>,
) -> AuthResult<Json<bool>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AvailabilityUseCase::new(state.repo.clone());
    Ok(Json(use_case.username_exists(&req.username).await?))
}

/// POST /doesEmailExist
pub async fn email_exists<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<EmailAvailabilityRequest>,
) -> AuthResult<Json<bool>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AvailabilityUseCase::new(state.repo.clone());
    Ok(Json(use_case.email_exists(&req.email).await?))
}

// ============================================================================
// Current user
// ============================================================================

/// GET /api/whoami
pub async fn whoami<R>(
    State(state): State<AuthAppState<R>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
) -> AuthResult<Json<UserIdentity>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = FindUserUseCase::new(state.repo.clone());
    let user = use_case.by_id(&user_id).await?;
    Ok(Json(user.identity()))
}
