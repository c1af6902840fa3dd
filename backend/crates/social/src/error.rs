//! Social Error Types
//!
//! This module provides social-graph error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::is_transient, kind::ErrorKind};
use thiserror::Error;

/// Social-specific result type alias
pub type SocialResult<T> = Result<T, SocialError>;

/// Social-specific error variants
#[derive(Debug, Error)]
pub enum SocialError {
    /// A user tried to follow themselves
    #[error("You cannot follow yourself.")]
    SelfFollow,

    /// Edge already exists
    #[error("You are already following this user.")]
    AlreadyFollowing,

    /// Edge does not exist
    #[error("You are not following this user.")]
    NotFollowing,

    /// Target user does not exist
    #[error("User not found")]
    UserNotFound,

    /// One of the profile reads failed
    #[error("Profile not available")]
    ProfileUnavailable,

    /// The social store could not be reached
    #[error("Please try again later.")]
    StoreUnavailable(#[from] sqlx::Error),

    /// Identity lookup failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SocialError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SocialError::SelfFollow => StatusCode::BAD_REQUEST,
            SocialError::AlreadyFollowing | SocialError::NotFollowing => StatusCode::CONFLICT,
            SocialError::UserNotFound | SocialError::ProfileUnavailable => StatusCode::NOT_FOUND,
            SocialError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SocialError::Auth(e) => e.status_code(),
            SocialError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SocialError::SelfFollow => ErrorKind::BadRequest,
            SocialError::AlreadyFollowing | SocialError::NotFollowing => ErrorKind::Conflict,
            SocialError::UserNotFound | SocialError::ProfileUnavailable => ErrorKind::NotFound,
            SocialError::StoreUnavailable(_) => ErrorKind::ServiceUnavailable,
            SocialError::Auth(e) => e.kind(),
            SocialError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = self.to_string();
        match self {
            SocialError::SelfFollow => AppError::bad_request(message),
            SocialError::AlreadyFollowing | SocialError::NotFollowing => {
                AppError::conflict(message)
            }
            SocialError::UserNotFound | SocialError::ProfileUnavailable => {
                AppError::not_found(message)
            }
            SocialError::StoreUnavailable(_) => AppError::service_unavailable(message),
            SocialError::Auth(e) => e.to_app_error(),
            SocialError::Internal(_) => AppError::internal("Something went wrong."),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            SocialError::StoreUnavailable(e) if is_transient(e) => {
                tracing::warn!(error = %e, "Social store unreachable");
            }
            SocialError::StoreUnavailable(e) => {
                tracing::error!(error = %e, "Social store error");
            }
            SocialError::Auth(e) => e.log(),
            SocialError::Internal(msg) => {
                tracing::error!(message = %msg, "Social internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Social error");
            }
        }
    }
}

impl IntoResponse for SocialError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
