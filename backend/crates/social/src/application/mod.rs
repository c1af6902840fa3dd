//! Application Layer
//!
//! Use cases and application services.

pub mod follow;
pub mod follow_graph;
pub mod profile;

// Re-exports
pub use follow::FollowUseCase;
pub use follow_graph::FollowGraphService;
pub use profile::{ProfileAggregator, ProfilePage, ProfileUseCase};

use std::sync::Arc;

use auth::application::FindUserUseCase;
use auth::domain::{User, UserRepository};
use auth::AuthError;

use crate::error::{SocialError, SocialResult};

/// Resolve a profile owner or follow target by user name
///
/// A malformed name cannot belong to anyone, so it is reported the same
/// way as an unknown one.
pub(crate) async fn resolve_user<U>(users: &Arc<U>, username: &str) -> SocialResult<User>
where
    U: UserRepository,
{
    FindUserUseCase::new(users.clone())
        .by_username(username)
        .await
        .map_err(|e| match e {
            AuthError::NotFound | AuthError::InvalidInput => SocialError::UserNotFound,
            other => SocialError::Auth(other),
        })
}
