//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use auth::domain::entity::user::UserIdentity;
use kernel::id::UserId;

use crate::domain::entities::FollowEdge;
use crate::error::SocialResult;

/// Follow edge repository trait
///
/// Listings are in edge insertion order, oldest first.
#[trait_variant::make(FollowRepository: Send)]
pub trait LocalFollowRepository {
    /// Record an edge
    ///
    /// Fails with `AlreadyFollowing` for an existing edge and `SelfFollow`
    /// when both ends are the same user.
    async fn insert(&self, edge: FollowEdge) -> SocialResult<()>;

    /// Remove an edge; returns whether one existed
    async fn delete(&self, edge: FollowEdge) -> SocialResult<bool>;

    /// Check if `follower_id` follows `followed_id`
    async fn is_following(&self, follower_id: &UserId, followed_id: &UserId) -> SocialResult<bool>;

    /// Number of users following `user_id`
    async fn count_followers(&self, user_id: &UserId) -> SocialResult<u64>;

    /// Number of users `user_id` follows
    async fn count_following(&self, user_id: &UserId) -> SocialResult<u64>;

    /// Users following `user_id`
    async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>>;

    /// Users `user_id` follows
    async fn list_following(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>>;
}

/// Post repository trait
///
/// Posts are written elsewhere; profiles only count them.
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Number of posts authored by `author_id`
    async fn count_by_author(&self, author_id: &UserId) -> SocialResult<u64>;
}
