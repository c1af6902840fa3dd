//! PostgreSQL Repository Implementation

use auth::domain::UserIdentity;
use auth::domain::value_object::{avatar::AvatarUrl, email::Email};
use kernel::error::conversions::{check_violation, foreign_key_violation, unique_violation};
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::FollowEdge;
use crate::domain::repository::{FollowRepository, PostRepository};
use crate::error::{SocialError, SocialResult};

/// PostgreSQL-backed follow and post store
#[derive(Clone)]
pub struct PgSocialStore {
    pool: PgPool,
}

impl PgSocialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, sql: &str, user_id: &UserId) -> SocialResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(sql)
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn list(&self, sql: &str, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
        let rows = sqlx::query_as::<_, IdentityRow>(sql)
            .bind(user_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(IdentityRow::into_identity).collect())
    }
}

// ============================================================================
// Follow Repository Implementation
// ============================================================================

impl FollowRepository for PgSocialStore {
    async fn insert(&self, edge: FollowEdge) -> SocialResult<()> {
        let result = sqlx::query("INSERT INTO follows (follower_id, followed_id) VALUES ($1, $2)")
            .bind(edge.follower_id.as_uuid())
            .bind(edge.followed_id.as_uuid())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if unique_violation(&e).is_some() => Err(SocialError::AlreadyFollowing),
            Err(e) if check_violation(&e).is_some() => Err(SocialError::SelfFollow),
            Err(e) if foreign_key_violation(&e).is_some() => Err(SocialError::UserNotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, edge: FollowEdge) -> SocialResult<bool> {
        let deleted = sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followed_id = $2")
            .bind(edge.follower_id.as_uuid())
            .bind(edge.followed_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn is_following(&self, follower_id: &UserId, followed_id: &UserId) -> SocialResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND followed_id = $2)",
        )
        .bind(follower_id.as_uuid())
        .bind(followed_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn count_followers(&self, user_id: &UserId) -> SocialResult<u64> {
        self.count("SELECT COUNT(*) FROM follows WHERE followed_id = $1", user_id)
            .await
    }

    async fn count_following(&self, user_id: &UserId) -> SocialResult<u64> {
        self.count("SELECT COUNT(*) FROM follows WHERE follower_id = $1", user_id)
            .await
    }

    async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
        self.list(
            r#"
            SELECT u.user_id, u.username, u.email
            FROM follows f
            JOIN users u ON u.user_id = f.follower_id
            WHERE f.followed_id = $1
            ORDER BY f.follow_id
            "#,
            user_id,
        )
        .await
    }

    async fn list_following(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
        self.list(
            r#"
            SELECT u.user_id, u.username, u.email
            FROM follows f
            JOIN users u ON u.user_id = f.followed_id
            WHERE f.follower_id = $1
            ORDER BY f.follow_id
            "#,
            user_id,
        )
        .await
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgSocialStore {
    async fn count_by_author(&self, author_id: &UserId) -> SocialResult<u64> {
        self.count("SELECT COUNT(*) FROM posts WHERE author_id = $1", author_id)
            .await
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct IdentityRow {
    user_id: Uuid,
    username: String,
    email: String,
}

impl IdentityRow {
    fn into_identity(self) -> UserIdentity {
        let avatar = AvatarUrl::for_email(&Email::from_db(self.email));
        UserIdentity {
            id: UserId::from_uuid(self.user_id),
            username: self.username,
            avatar_url: avatar.into_inner(),
        }
    }
}
