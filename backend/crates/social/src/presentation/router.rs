//! Social Router

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::{AuthConfig, TokenService};
use auth::domain::UserRepository;
use auth::infra::PgUserStore;
use auth::middleware::require_token;

use crate::domain::repository::{FollowRepository, PostRepository};
use crate::infra::postgres::PgSocialStore;
use crate::presentation::handlers::{self, SocialAppState};

/// Create the Social router with PostgreSQL repositories
pub fn social_router(users: PgUserStore, store: PgSocialStore, config: AuthConfig) -> Router {
    social_router_generic(users, store, config)
}

/// Create a generic Social router for any repository implementations
///
/// `config` must carry the same token secret as the auth router.
pub fn social_router_generic<U, S>(users: U, store: S, config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    S: FollowRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let tokens = TokenService::new(Arc::new(config));
    let state = SocialAppState {
        users: Arc::new(users),
        store: Arc::new(store),
        tokens: tokens.clone(),
    };

    let protected = Router::new()
        .route("/follow/{username}", post(handlers::follow::<U, S>))
        .route("/unfollow/{username}", post(handlers::unfollow::<U, S>))
        .route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
            require_token(tokens.clone(), req, next)
        }));

    Router::new()
        .route("/profile/{username}", get(handlers::profile::<U, S>))
        .route("/profile/{username}/followers", get(handlers::followers::<U, S>))
        .route("/profile/{username}/following", get(handlers::following::<U, S>))
        .merge(protected)
        .with_state(state)
}
