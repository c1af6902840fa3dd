//! In-Memory Repository Implementation
//!
//! Follow edges are kept in insertion order; user names and avatars are
//! resolved through the shared in-memory user store.

use std::collections::HashMap;
use std::sync::Arc;

use auth::InMemoryUserStore;
use auth::domain::{UserIdentity, UserRepository};
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entities::FollowEdge;
use crate::domain::repository::{FollowRepository, PostRepository};
use crate::error::{SocialError, SocialResult};

#[derive(Debug, Default)]
struct SocialTables {
    edges: Vec<FollowEdge>,
    posts_by_author: HashMap<UserId, u64>,
}

/// In-memory follow and post store
#[derive(Debug, Clone)]
pub struct InMemorySocialStore {
    users: InMemoryUserStore,
    tables: Arc<RwLock<SocialTables>>,
}

impl InMemorySocialStore {
    pub fn new(users: InMemoryUserStore) -> Self {
        Self {
            users,
            tables: Arc::default(),
        }
    }

    /// Count one more post for `author_id`
    pub async fn record_post(&self, author_id: UserId) {
        *self
            .tables
            .write()
            .await
            .posts_by_author
            .entry(author_id)
            .or_default() += 1;
    }

    async fn user_exists(&self, user_id: &UserId) -> SocialResult<bool> {
        Ok(self.users.find_by_id(user_id).await?.is_some())
    }

    /// Resolve ids in order, skipping users that no longer exist
    async fn identities(&self, ids: Vec<UserId>) -> SocialResult<Vec<UserIdentity>> {
        let mut identities = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(user) = self.users.find_by_id(&id).await? {
                identities.push(user.identity());
            }
        }
        Ok(identities)
    }
}

impl FollowRepository for InMemorySocialStore {
    async fn insert(&self, edge: FollowEdge) -> SocialResult<()> {
        if edge.is_self_follow() {
            return Err(SocialError::SelfFollow);
        }
        if !self.user_exists(&edge.follower_id).await?
            || !self.user_exists(&edge.followed_id).await?
        {
            return Err(SocialError::UserNotFound);
        }

        let mut tables = self.tables.write().await;
        if tables.edges.contains(&edge) {
            return Err(SocialError::AlreadyFollowing);
        }
        tables.edges.push(edge);
        Ok(())
    }

    async fn delete(&self, edge: FollowEdge) -> SocialResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.edges.len();
        tables.edges.retain(|e| *e != edge);
        Ok(tables.edges.len() < before)
    }

    async fn is_following(&self, follower_id: &UserId, followed_id: &UserId) -> SocialResult<bool> {
        let edge = FollowEdge::new(*follower_id, *followed_id);
        Ok(self.tables.read().await.edges.contains(&edge))
    }

    async fn count_followers(&self, user_id: &UserId) -> SocialResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables.edges.iter().filter(|e| e.followed_id == *user_id).count() as u64)
    }

    async fn count_following(&self, user_id: &UserId) -> SocialResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables.edges.iter().filter(|e| e.follower_id == *user_id).count() as u64)
    }

    async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
        let ids = self
            .tables
            .read()
            .await
            .edges
            .iter()
            .filter(|e| e.followed_id == *user_id)
            .map(|e| e.follower_id)
            .collect();
        self.identities(ids).await
    }

    async fn list_following(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
        let ids = self
            .tables
            .read()
            .await
            .edges
            .iter()
            .filter(|e| e.follower_id == *user_id)
            .map(|e| e.followed_id)
            .collect();
        self.identities(ids).await
    }
}

impl PostRepository for InMemorySocialStore {
    async fn count_by_author(&self, author_id: &UserId) -> SocialResult<u64> {
        Ok(self
            .tables
            .read()
            .await
            .posts_by_author
            .get(author_id)
            .copied()
            .unwrap_or(0))
    }
}
