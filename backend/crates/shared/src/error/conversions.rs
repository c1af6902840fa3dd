//! Error conversions
//!
//! Integration of [`AppError`] with the HTTP layer and helpers for reading
//! store errors. Both are feature-gated so the kernel stays dependency-light.

#[cfg(feature = "sqlx")]
pub use self::store::{check_violation, foreign_key_violation, is_transient, unique_violation};

// ============================================================================
// SQLx helpers (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
mod store {
    /// PostgreSQL `unique_violation`
    const UNIQUE_VIOLATION: &str = "23505";

    /// PostgreSQL `foreign_key_violation`
    const FOREIGN_KEY_VIOLATION: &str = "23503";

    /// PostgreSQL `check_violation`
    const CHECK_VIOLATION: &str = "23514";

    fn violated_constraint<'a>(err: &'a sqlx::Error, code: &str) -> Option<&'a str> {
        match err {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(code) => {
                Some(db_err.constraint().unwrap_or_default())
            }
            _ => None,
        }
    }

    /// Name of the violated unique constraint, if `err` is a unique violation
    pub fn unique_violation(err: &sqlx::Error) -> Option<&str> {
        violated_constraint(err, UNIQUE_VIOLATION)
    }

    /// Name of the violated foreign key, if `err` is a foreign key violation
    pub fn foreign_key_violation(err: &sqlx::Error) -> Option<&str> {
        violated_constraint(err, FOREIGN_KEY_VIOLATION)
    }

    /// Name of the violated check constraint, if `err` is a check violation
    pub fn check_violation(err: &sqlx::Error) -> Option<&str> {
        violated_constraint(err, CHECK_VIOLATION)
    }

    /// Whether the failure is about reaching the store rather than the query
    pub fn is_transient(err: &sqlx::Error) -> bool {
        matches!(
            err,
            sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::WorkerCrashed
        )
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "errors": self.details(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
