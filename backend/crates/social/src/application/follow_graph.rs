//! Follow Graph Service
//!
//! Query side of the follow graph: relationship checks, counts and lists.

use std::sync::Arc;

use auth::domain::UserIdentity;
use kernel::id::UserId;

use crate::domain::repository::FollowRepository;
use crate::error::SocialResult;

/// Follow graph queries
pub struct FollowGraphService<F>
where
    F: FollowRepository,
{
    follows: Arc<F>,
}

impl<F> FollowGraphService<F>
where
    F: FollowRepository,
{
    pub fn new(follows: Arc<F>) -> Self {
        Self { follows }
    }

    pub async fn is_following(
        &self,
        follower_id: &UserId,
        followed_id: &UserId,
    ) -> SocialResult<bool> {
        self.follows.is_following(follower_id, followed_id).await
    }

    pub async fn count_followers(&self, user_id: &UserId) -> SocialResult<u64> {
        self.follows.count_followers(user_id).await
    }

    pub async fn count_following(&self, user_id: &UserId) -> SocialResult<u64> {
        self.follows.count_following(user_id).await
    }

    /// Followers of `user_id`, oldest edge first
    pub async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
        self.follows.list_followers(user_id).await
    }

    /// Users followed by `user_id`, oldest edge first
    pub async fn list_following(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
        self.follows.list_following(user_id).await
    }
}
