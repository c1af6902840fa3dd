//! Follow / Unfollow Use Case

use std::sync::Arc;

use auth::domain::UserRepository;
use kernel::id::UserId;

use crate::application::resolve_user;
use crate::domain::entities::FollowEdge;
use crate::domain::repository::FollowRepository;
use crate::error::{SocialError, SocialResult};

/// Follow use case
pub struct FollowUseCase<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    users: Arc<U>,
    follows: Arc<F>,
}

impl<U, F> FollowUseCase<U, F>
where
    U: UserRepository,
    F: FollowRepository,
{
    pub fn new(users: Arc<U>, follows: Arc<F>) -> Self {
        Self { users, follows }
    }

    /// Make `follower_id` follow the user named `target`
    pub async fn follow(&self, follower_id: UserId, target: &str) -> SocialResult<()> {
        let edge = self.edge_to(follower_id, target).await?;
        self.follows.insert(edge).await?;

        tracing::info!(
            follower_id = %edge.follower_id,
            followed_id = %edge.followed_id,
            "Follow recorded"
        );
        Ok(())
    }

    /// Remove the edge from `follower_id` to the user named `target`
    pub async fn unfollow(&self, follower_id: UserId, target: &str) -> SocialResult<()> {
        let edge = self.edge_to(follower_id, target).await?;
        if !self.follows.delete(edge).await? {
            return Err(SocialError::NotFollowing);
        }

        tracing::info!(
            follower_id = %edge.follower_id,
            followed_id = %edge.followed_id,
            "Follow removed"
        );
        Ok(())
    }

    async fn edge_to(&self, follower_id: UserId, target: &str) -> SocialResult<FollowEdge> {
        let followed = resolve_user(&self.users, target).await?;
        let edge = FollowEdge::new(follower_id, followed.user_id);
        if edge.is_self_follow() {
            return Err(SocialError::SelfFollow);
        }
        Ok(edge)
    }
}
