//! Social Graph Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Follow edges, profile records, repository traits
//! - `application/` - Follow graph queries, follow commands, profile aggregation
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers
//!
//! Users are owned by the `auth` crate; this crate only refers to them by
//! id and resolves names through `auth`'s user repository.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{SocialError, SocialResult};
pub use infra::{memory::InMemorySocialStore, postgres::PgSocialStore};
pub use presentation::router::social_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod store {
    pub use crate::domain::repository::{FollowRepository, PostRepository};
    pub use crate::infra::memory::InMemorySocialStore;
    pub use crate::infra::postgres::PgSocialStore;
}

#[cfg(test)]
mod tests;
