//! Auth Router

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserStore;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_token;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserStore, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, config);
    let tokens = state.tokens.clone();

    let protected = Router::new()
        .route("/api/whoami", get(handlers::whoami::<R>))
        .route_layer(middleware::from_fn(move |req: Request<Body>, next: Next| {
            require_token(tokens.clone(), req, next)
        }));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/api/login", post(handlers::api_login::<R>))
        .route("/doesUsernameExist", post(handlers::username_exists::<R>))
        .route("/doesEmailExist", post(handlers::email_exists::<R>))
        .merge(protected)
        .with_state(state)
}
