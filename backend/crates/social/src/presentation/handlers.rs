//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use std::sync::Arc;

use auth::application::TokenService;
use auth::domain::UserRepository;
use auth::middleware::{AuthenticatedUser, authenticate_optional};

use crate::application::{FollowUseCase, ProfilePage, ProfileUseCase};
use crate::domain::entities::ProfileView;
use crate::domain::repository::{FollowRepository, PostRepository};
use crate::error::SocialResult;
use crate::presentation::dto::FollowResponse;

/// Shared state for social handlers
#[derive(Clone)]
pub struct SocialAppState<U, S>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: FollowRepository + PostRepository + Clone + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub store: Arc<S>,
    pub tokens: TokenService,
}

// ============================================================================
// Profiles
// ============================================================================

/// GET /profile/{username}
pub async fn profile<U, S>(
    State(state): State<SocialAppState<U, S>>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> SocialResult<Json<ProfileView>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: FollowRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let visitor = authenticate_optional(&state.tokens, &headers)?;
    let use_case = ProfileUseCase::new(state.users.clone(), state.store.clone());
    Ok(Json(use_case.view(&username, visitor).await?))
}

/// GET /profile/{username}/followers
pub async fn followers<U, S>(
    State(state): State<SocialAppState<U, S>>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> SocialResult<Json<ProfilePage>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: FollowRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let visitor = authenticate_optional(&state.tokens, &headers)?;
    let use_case = ProfileUseCase::new(state.users.clone(), state.store.clone());
    Ok(Json(use_case.followers(&username, visitor).await?))
}

/// GET /profile/{username}/following
pub async fn following<U, S>(
    State(state): State<SocialAppState<U, S>>,
    Path(username): Path<String>,
    headers: HeaderMap,
) -> SocialResult<Json<ProfilePage>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: FollowRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let visitor = authenticate_optional(&state.tokens, &headers)?;
    let use_case = ProfileUseCase::new(state.users.clone(), state.store.clone());
    Ok(Json(use_case.following(&username, visitor).await?))
}

// ============================================================================
// Follow / Unfollow
// ============================================================================

/// POST /follow/{username}
pub async fn follow<U, S>(
    State(state): State<SocialAppState<U, S>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(username): Path<String>,
) -> SocialResult<Json<FollowResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: FollowRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = FollowUseCase::new(state.users.clone(), state.store.clone());
    use_case.follow(user_id, &username).await?;

    Ok(Json(FollowResponse {
        username,
        is_following: true,
    }))
}

/// POST /unfollow/{username}
pub async fn unfollow<U, S>(
    State(state): State<SocialAppState<U, S>>,
    AuthenticatedUser(user_id): AuthenticatedUser,
    Path(username): Path<String>,
) -> SocialResult<Json<FollowResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: FollowRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = FollowUseCase::new(state.users.clone(), state.store.clone());
    use_case.unfollow(user_id, &username).await?;

    Ok(Json(FollowResponse {
        username,
        is_following: false,
    }))
}
