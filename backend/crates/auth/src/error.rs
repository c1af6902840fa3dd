//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::is_transient, kind::ErrorKind};
use thiserror::Error;

use crate::domain::services::CredentialFailure;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration input broke one or more rules, in reporting order
    #[error("Registration failed: {}", join_failures(.0))]
    ValidationFailed(Vec<CredentialFailure>),

    /// Unknown user or wrong password; the two are never told apart
    #[error("Invalid username / password.")]
    AuthenticationFailed,

    /// Lookup miss
    #[error("User not found")]
    NotFound,

    /// Lookup key is not a well-formed user name
    #[error("Invalid username")]
    InvalidInput,

    /// Bearer token missing, malformed, expired or forged
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The user store could not be reached
    #[error("Please try again later.")]
    StoreUnavailable(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

fn join_failures(failures: &[CredentialFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::AuthenticationFailed | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::NotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidInput => StatusCode::BAD_REQUEST,
            AuthError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::ValidationFailed(_) => ErrorKind::UnprocessableEntity,
            AuthError::AuthenticationFailed | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::NotFound => ErrorKind::NotFound,
            AuthError::InvalidInput => ErrorKind::BadRequest,
            AuthError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Failures carried by `ValidationFailed`, empty otherwise
    pub fn failures(&self) -> &[CredentialFailure] {
        match self {
            AuthError::ValidationFailed(failures) => failures,
            _ => &[],
        }
    }

    /// Convert to AppError
    ///
    /// Store and internal details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        let message = self.to_string();
        match self {
            AuthError::ValidationFailed(failures) => {
                AppError::unprocessable("Registration failed")
                    .with_details(failures.iter().map(ToString::to_string))
            }
            AuthError::AuthenticationFailed => AppError::unauthorized(message),
            AuthError::InvalidToken => {
                AppError::unauthorized(message).with_action("Sign in again.")
            }
            AuthError::NotFound => AppError::not_found(message),
            AuthError::InvalidInput => AppError::bad_request(message),
            AuthError::StoreUnavailable(_) => AppError::service_unavailable(message),
            AuthError::Internal(_) => AppError::internal("Something went wrong."),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::StoreUnavailable(e) if is_transient(e) => {
                tracing::warn!(error = %e, "User store unreachable");
            }
            AuthError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "User store error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AuthenticationFailed => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
