//! Auth Middleware
//!
//! Bearer token checks for protected routes.

use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, Request, header, request::Parts};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::TokenService;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Id of the caller, placed in request extensions by [`require_token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub UserId);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Identify the caller if a token was sent
///
/// No header means an anonymous caller. A header with a bad token is an
/// error, never a silent downgrade to anonymous.
pub fn authenticate_optional(
    tokens: &TokenService,
    headers: &HeaderMap,
) -> AuthResult<Option<UserId>> {
    if headers.get(header::AUTHORIZATION).is_none() {
        return Ok(None);
    }
    let token = bearer_token(headers).ok_or(AuthError::InvalidToken)?;
    tokens.verify(token).map(Some)
}

/// Middleware that requires a valid bearer token
pub async fn require_token(
    tokens: TokenService,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(req.headers()).ok_or(AuthError::InvalidToken)?;
    let user_id = tokens.verify(token)?;

    req.extensions_mut().insert(AuthenticatedUser(user_id));

    Ok(next.run(req).await)
}
