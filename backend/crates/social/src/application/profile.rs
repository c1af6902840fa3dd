//! Profile Aggregator
//!
//! Builds the composite profile record. The post count, both follow counts
//! and the visitor's follow check are independent reads and run
//! concurrently; the first failure fails the whole profile.

use std::sync::Arc;

use auth::domain::{User, UserIdentity, UserRepository};
use kernel::id::UserId;
use serde::Serialize;

use crate::application::{follow_graph::FollowGraphService, resolve_user};
use crate::domain::entities::{ProfileCounts, ProfileView};
use crate::domain::repository::{FollowRepository, PostRepository};
use crate::error::{SocialError, SocialResult};

/// Concurrent profile reads
pub struct ProfileAggregator<F, P>
where
    F: FollowRepository,
    P: PostRepository,
{
    follows: Arc<F>,
    posts: Arc<P>,
}

impl<F, P> ProfileAggregator<F, P>
where
    F: FollowRepository,
    P: PostRepository,
{
    pub fn new(follows: Arc<F>, posts: Arc<P>) -> Self {
        Self { follows, posts }
    }

    /// Aggregate the profile of `owner` as seen by `visitor`
    ///
    /// Anonymous visitors and owners viewing themselves skip the follow
    /// check; `is_following` is then false.
    pub async fn aggregate(
        &self,
        owner: &User,
        visitor: Option<UserId>,
    ) -> SocialResult<ProfileView> {
        let target = owner.user_id;
        let is_own_profile = visitor == Some(target);

        let follow_check = async {
            match visitor {
                Some(visitor_id) if visitor_id != target => {
                    self.follows.is_following(&visitor_id, &target).await
                }
                _ => Ok(false),
            }
        };

        let (posts, followers, following, is_following) = tokio::try_join!(
            self.posts.count_by_author(&target),
            self.follows.count_followers(&target),
            self.follows.count_following(&target),
            follow_check,
        )
        .map_err(|e| {
            e.log();
            tracing::warn!(user_id = %target, "Profile aggregation failed");
            SocialError::ProfileUnavailable
        })?;

        let counts = ProfileCounts {
            posts,
            followers,
            following,
        };

        Ok(ProfileView::new(owner, is_own_profile, is_following, counts))
    }
}

/// Profile plus one of its user lists
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub profile: ProfileView,
    pub users: Vec<UserIdentity>,
}

/// Profile screens addressed by user name
pub struct ProfileUseCase<U, S>
where
    U: UserRepository,
    S: FollowRepository + PostRepository,
{
    users: Arc<U>,
    graph: FollowGraphService<S>,
    aggregator: ProfileAggregator<S, S>,
}

impl<U, S> ProfileUseCase<U, S>
where
    U: UserRepository,
    S: FollowRepository + PostRepository,
{
    pub fn new(users: Arc<U>, store: Arc<S>) -> Self {
        Self {
            aggregator: ProfileAggregator::new(store.clone(), store.clone()),
            graph: FollowGraphService::new(store),
            users,
        }
    }

    pub async fn view(
        &self,
        username: &str,
        visitor: Option<UserId>,
    ) -> SocialResult<ProfileView> {
        let owner = resolve_user(&self.users, username).await?;
        self.aggregator.aggregate(&owner, visitor).await
    }

    pub async fn followers(
        &self,
        username: &str,
        visitor: Option<UserId>,
    ) -> SocialResult<ProfilePage> {
        let owner = resolve_user(&self.users, username).await?;
        let users = self.graph.list_followers(&owner.user_id);
        self.page(&owner, visitor, users).await
    }

    pub async fn following(
        &self,
        username: &str,
        visitor: Option<UserId>,
    ) -> SocialResult<ProfilePage> {
        let owner = resolve_user(&self.users, username).await?;
        let users = self.graph.list_following(&owner.user_id);
        self.page(&owner, visitor, users).await
    }

    /// Profile and list read together; a failed list read fails the page
    /// like any other profile read.
    async fn page(
        &self,
        owner: &User,
        visitor: Option<UserId>,
        users: impl Future<Output = SocialResult<Vec<UserIdentity>>>,
    ) -> SocialResult<ProfilePage> {
        let users = async {
            users.await.map_err(|e| {
                e.log();
                tracing::warn!(user_id = %owner.user_id, "Profile user list unavailable");
                SocialError::ProfileUnavailable
            })
        };

        let (profile, users) =
            tokio::try_join!(self.aggregator.aggregate(owner, visitor), users)?;
        Ok(ProfilePage { profile, users })
    }
}
