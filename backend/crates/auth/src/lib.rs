//! Auth (Identity) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits, credential validator
//! - `application/` - Use cases and token service
//! - `infra/` - PostgreSQL and in-memory user stores
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration with every validation failure reported at once
//! - Login by user name and password (case-insensitive user name)
//! - Availability checks for the registration form
//! - Bearer tokens for API clients
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never stored or logged in clear
//! - Unknown user and wrong password produce the same error
//! - Tokens are HS256-signed and fail closed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserStore, postgres::PgUserStore};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::{session::*, user::*};
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::UserRepository;
    pub use crate::infra::memory::InMemoryUserStore;
    pub use crate::infra::postgres::PgUserStore;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
