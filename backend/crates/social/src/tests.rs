//! Scenario tests for the social crate

#[cfg(test)]
mod support {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use auth::InMemoryUserStore;
    use tokio::sync::Barrier;
    use auth::application::RegisterUseCase;
    use auth::domain::services::RegistrationInput;
    use auth::domain::{User, UserIdentity, UserRepository};
    use kernel::id::UserId;

    use crate::domain::entities::FollowEdge;
    use crate::domain::repository::{FollowRepository, PostRepository};
    use crate::error::{SocialError, SocialResult};
    use crate::infra::memory::InMemorySocialStore;

    pub const PASSWORD: &str = "correct horse battery";

    pub struct World {
        pub users: InMemoryUserStore,
        pub store: InMemorySocialStore,
    }

    impl World {
        pub fn new() -> Self {
            let users = InMemoryUserStore::new();
            let store = InMemorySocialStore::new(users.clone());
            Self { users, store }
        }

        pub async fn register(&self, username: &str) -> User {
            let output = RegisterUseCase::new(Arc::new(self.users.clone()))
                .execute(RegistrationInput {
                    username: username.to_string(),
                    email: format!("{username}@example.com"),
                    password: PASSWORD.to_string(),
                })
                .await
                .unwrap();

            self.users
                .find_by_id(&output.identity.id)
                .await
                .unwrap()
                .unwrap()
        }

        pub async fn follow(&self, follower: &User, followed: &User) {
            self.store
                .insert(FollowEdge::new(follower.user_id, followed.user_id))
                .await
                .unwrap();
        }
    }

    /// Follow store that counts relationship checks
    #[derive(Clone)]
    pub struct CountingFollows {
        pub inner: InMemorySocialStore,
        pub checks: Arc<AtomicUsize>,
    }

    impl CountingFollows {
        pub fn new(inner: InMemorySocialStore) -> Self {
            Self {
                inner,
                checks: Arc::default(),
            }
        }

        pub fn checks(&self) -> usize {
            self.checks.load(Ordering::SeqCst)
        }
    }

    impl FollowRepository for CountingFollows {
        async fn insert(&self, edge: FollowEdge) -> SocialResult<()> {
            self.inner.insert(edge).await
        }

        async fn delete(&self, edge: FollowEdge) -> SocialResult<bool> {
            self.inner.delete(edge).await
        }

        async fn is_following(
            &self,
            follower_id: &UserId,
            followed_id: &UserId,
        ) -> SocialResult<bool> {
            self.checks.fetch_add(1, Ordering::SeqCst);
            self.inner.is_following(follower_id, followed_id).await
        }

        async fn count_followers(&self, user_id: &UserId) -> SocialResult<u64> {
            self.inner.count_followers(user_id).await
        }

        async fn count_following(&self, user_id: &UserId) -> SocialResult<u64> {
            self.inner.count_following(user_id).await
        }

        async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
            self.inner.list_followers(user_id).await
        }

        async fn list_following(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
            self.inner.list_following(user_id).await
        }
    }

    /// Post store whose database is down
    pub struct UnreachablePosts;

    impl PostRepository for UnreachablePosts {
        async fn count_by_author(&self, _author_id: &UserId) -> SocialResult<u64> {
            Err(SocialError::StoreUnavailable(sqlx::Error::PoolTimedOut))
        }
    }

    /// Store whose profile reads all wait on one barrier
    ///
    /// The reads only complete once every party has arrived, so a profile
    /// built from them one at a time never finishes.
    pub struct BarrierStore {
        pub inner: InMemorySocialStore,
        pub barrier: Barrier,
    }

    impl BarrierStore {
        pub fn new(inner: InMemorySocialStore, parties: usize) -> Self {
            Self {
                inner,
                barrier: Barrier::new(parties),
            }
        }
    }

    impl FollowRepository for BarrierStore {
        async fn insert(&self, edge: FollowEdge) -> SocialResult<()> {
            self.inner.insert(edge).await
        }

        async fn delete(&self, edge: FollowEdge) -> SocialResult<bool> {
            self.inner.delete(edge).await
        }

        async fn is_following(
            &self,
            follower_id: &UserId,
            followed_id: &UserId,
        ) -> SocialResult<bool> {
            self.barrier.wait().await;
            self.inner.is_following(follower_id, followed_id).await
        }

        async fn count_followers(&self, user_id: &UserId) -> SocialResult<u64> {
            self.barrier.wait().await;
            self.inner.count_followers(user_id).await
        }

        async fn count_following(&self, user_id: &UserId) -> SocialResult<u64> {
            self.barrier.wait().await;
            self.inner.count_following(user_id).await
        }

        async fn list_followers(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
            self.inner.list_followers(user_id).await
        }

        async fn list_following(&self, user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
            self.inner.list_following(user_id).await
        }
    }

    impl PostRepository for BarrierStore {
        async fn count_by_author(&self, author_id: &UserId) -> SocialResult<u64> {
            self.barrier.wait().await;
            self.inner.count_by_author(author_id).await
        }
    }

    /// Store whose follower and following lists cannot be read
    pub struct UnreachableLists(pub InMemorySocialStore);

    impl FollowRepository for UnreachableLists {
        async fn insert(&self, edge: FollowEdge) -> SocialResult<()> {
            self.0.insert(edge).await
        }

        async fn delete(&self, edge: FollowEdge) -> SocialResult<bool> {
            self.0.delete(edge).await
        }

        async fn is_following(
            &self,
            follower_id: &UserId,
            followed_id: &UserId,
        ) -> SocialResult<bool> {
            self.0.is_following(follower_id, followed_id).await
        }

        async fn count_followers(&self, user_id: &UserId) -> SocialResult<u64> {
            self.0.count_followers(user_id).await
        }

        async fn count_following(&self, user_id: &UserId) -> SocialResult<u64> {
            self.0.count_following(user_id).await
        }

        async fn list_followers(&self, _user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
            Err(SocialError::StoreUnavailable(sqlx::Error::PoolTimedOut))
        }

        async fn list_following(&self, _user_id: &UserId) -> SocialResult<Vec<UserIdentity>> {
            Err(SocialError::StoreUnavailable(sqlx::Error::PoolTimedOut))
        }
    }

    impl PostRepository for UnreachableLists {
        async fn count_by_author(&self, author_id: &UserId) -> SocialResult<u64> {
            self.0.count_by_author(author_id).await
        }
    }
}

#[cfg(test)]
mod follow_graph_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::{FollowGraphService, FollowUseCase};
    use crate::error::SocialError;

    #[tokio::test]
    async fn test_counts_match_list_lengths() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        let carol = world.register("carol1").await;

        world.follow(&bob, &alice).await;
        world.follow(&carol, &alice).await;
        world.follow(&alice, &carol).await;

        let graph = FollowGraphService::new(Arc::new(world.store.clone()));
        for user in [&alice, &bob, &carol] {
            let followers = graph.list_followers(&user.user_id).await.unwrap();
            let following = graph.list_following(&user.user_id).await.unwrap();
            assert_eq!(
                graph.count_followers(&user.user_id).await.unwrap(),
                followers.len() as u64
            );
            assert_eq!(
                graph.count_following(&user.user_id).await.unwrap(),
                following.len() as u64
            );
        }

        assert_eq!(graph.count_followers(&alice.user_id).await.unwrap(), 2);
        assert_eq!(graph.count_following(&bob.user_id).await.unwrap(), 1);
        assert!(graph.is_following(&bob.user_id, &alice.user_id).await.unwrap());
        assert!(!graph.is_following(&alice.user_id, &bob.user_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_lists_in_insertion_order() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let zed = world.register("zed123").await;
        let bob = world.register("bob123").await;

        world.follow(&zed, &alice).await;
        world.follow(&bob, &alice).await;

        let graph = FollowGraphService::new(Arc::new(world.store.clone()));
        let names: Vec<String> = graph
            .list_followers(&alice.user_id)
            .await
            .unwrap()
            .into_iter()
            .map(|identity| identity.username)
            .collect();

        assert_eq!(names, ["zed123", "bob123"]);
    }

    #[tokio::test]
    async fn test_list_entries_carry_avatar() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        world.follow(&bob, &alice).await;

        let graph = FollowGraphService::new(Arc::new(world.store.clone()));
        let followers = graph.list_followers(&alice.user_id).await.unwrap();

        assert_eq!(followers, vec![bob.identity()]);
    }

    #[tokio::test]
    async fn test_follow_and_unfollow_by_name() {
        let world = World::new();
        world.register("alice1").await;
        let bob = world.register("bob123").await;
        let use_case = FollowUseCase::new(
            Arc::new(world.users.clone()),
            Arc::new(world.store.clone()),
        );

        use_case.follow(bob.user_id, "ALICE1").await.unwrap();
        assert!(matches!(
            use_case.follow(bob.user_id, "alice1").await,
            Err(SocialError::AlreadyFollowing)
        ));

        use_case.unfollow(bob.user_id, "alice1").await.unwrap();
        assert!(matches!(
            use_case.unfollow(bob.user_id, "alice1").await,
            Err(SocialError::NotFollowing)
        ));
    }

    #[tokio::test]
    async fn test_self_follow_rejected() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let use_case = FollowUseCase::new(
            Arc::new(world.users.clone()),
            Arc::new(world.store.clone()),
        );

        assert!(matches!(
            use_case.follow(alice.user_id, "alice1").await,
            Err(SocialError::SelfFollow)
        ));
    }

    #[tokio::test]
    async fn test_unknown_or_malformed_target() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let use_case = FollowUseCase::new(
            Arc::new(world.users.clone()),
            Arc::new(world.store.clone()),
        );

        assert!(matches!(
            use_case.follow(alice.user_id, "nobody1").await,
            Err(SocialError::UserNotFound)
        ));
        assert!(matches!(
            use_case.follow(alice.user_id, "no body").await,
            Err(SocialError::UserNotFound)
        ));
    }
}

#[cfg(test)]
mod profile_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::support::*;
    use crate::application::{ProfileAggregator, ProfileUseCase};
    use crate::domain::entities::ProfileCounts;
    use crate::error::SocialError;

    #[tokio::test]
    async fn test_anonymous_visitor_skips_follow_check() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        world.follow(&bob, &alice).await;

        let follows = Arc::new(CountingFollows::new(world.store.clone()));
        let aggregator = ProfileAggregator::new(follows.clone(), Arc::new(world.store.clone()));

        let view = aggregator.aggregate(&alice, None).await.unwrap();

        assert!(!view.is_following);
        assert!(!view.is_own_profile);
        assert_eq!(follows.checks(), 0);
        assert_eq!(view.counts.followers, 1);
    }

    #[tokio::test]
    async fn test_visitor_relationship() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        let carol = world.register("carol1").await;
        world.follow(&bob, &alice).await;

        let follows = Arc::new(CountingFollows::new(world.store.clone()));
        let aggregator = ProfileAggregator::new(follows.clone(), Arc::new(world.store.clone()));

        let by_bob = aggregator.aggregate(&alice, Some(bob.user_id)).await.unwrap();
        assert!(by_bob.is_following);

        let by_carol = aggregator.aggregate(&alice, Some(carol.user_id)).await.unwrap();
        assert!(!by_carol.is_following);

        assert_eq!(follows.checks(), 2);
    }

    #[tokio::test]
    async fn test_own_profile() {
        let world = World::new();
        let alice = world.register("alice1").await;

        let follows = Arc::new(CountingFollows::new(world.store.clone()));
        let aggregator = ProfileAggregator::new(follows.clone(), Arc::new(world.store.clone()));

        let view = aggregator.aggregate(&alice, Some(alice.user_id)).await.unwrap();
        assert!(view.is_own_profile);
        assert!(!view.is_following);
        assert_eq!(follows.checks(), 0);
    }

    #[tokio::test]
    async fn test_three_counts() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        world.follow(&bob, &alice).await;
        world.follow(&alice, &bob).await;
        world.store.record_post(alice.user_id).await;
        world.store.record_post(alice.user_id).await;

        let use_case = ProfileUseCase::new(
            Arc::new(world.users.clone()),
            Arc::new(world.store.clone()),
        );
        let view = use_case.view("alice1", None).await.unwrap();

        assert_eq!(
            view.counts,
            ProfileCounts {
                posts: 2,
                followers: 1,
                following: 1,
            }
        );
        assert_eq!(view.user, alice.identity());
    }

    #[tokio::test]
    async fn test_failed_read_makes_profile_unavailable() {
        let world = World::new();
        let alice = world.register("alice1").await;

        let aggregator =
            ProfileAggregator::new(Arc::new(world.store.clone()), Arc::new(UnreachablePosts));
        let result = aggregator.aggregate(&alice, None).await;

        assert!(matches!(result, Err(SocialError::ProfileUnavailable)));
    }

    #[tokio::test]
    async fn test_profile_reads_run_concurrently() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        world.follow(&bob, &alice).await;

        let store = Arc::new(BarrierStore::new(world.store.clone(), 4));
        let aggregator = ProfileAggregator::new(store.clone(), store);

        let view = tokio::time::timeout(
            Duration::from_secs(5),
            aggregator.aggregate(&alice, Some(bob.user_id)),
        )
        .await
        .expect("profile reads did not overlap")
        .unwrap();

        assert!(view.is_following);
        assert_eq!(view.counts.followers, 1);
    }

    #[tokio::test]
    async fn test_failed_list_read_makes_page_unavailable() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        world.follow(&bob, &alice).await;

        let use_case = ProfileUseCase::new(
            Arc::new(world.users.clone()),
            Arc::new(UnreachableLists(world.store.clone())),
        );

        assert!(matches!(
            use_case.followers("alice1", None).await,
            Err(SocialError::ProfileUnavailable)
        ));
        assert!(matches!(
            use_case.following("alice1", Some(bob.user_id)).await,
            Err(SocialError::ProfileUnavailable)
        ));
        assert!(use_case.view("alice1", None).await.is_ok());
    }

    #[tokio::test]
    async fn test_pages_include_lists() {
        let world = World::new();
        let alice = world.register("alice1").await;
        let bob = world.register("bob123").await;
        world.follow(&bob, &alice).await;

        let use_case = ProfileUseCase::new(
            Arc::new(world.users.clone()),
            Arc::new(world.store.clone()),
        );

        let followers = use_case.followers("alice1", Some(bob.user_id)).await.unwrap();
        assert_eq!(followers.users, vec![bob.identity()]);
        assert!(followers.profile.is_following);
        assert_eq!(followers.profile.counts.followers, followers.users.len() as u64);

        let following = use_case.following("alice1", None).await.unwrap();
        assert!(following.users.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_profile() {
        let world = World::new();
        let use_case = ProfileUseCase::new(
            Arc::new(world.users.clone()),
            Arc::new(world.store.clone()),
        );

        assert!(matches!(
            use_case.view("ghost1", None).await,
            Err(SocialError::UserNotFound)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::application::{AuthConfig, TokenService};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::support::*;
    use crate::presentation::router::social_router_generic;

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_follow_then_view_profile() {
        let world = World::new();
        world.register("alice1").await;
        let bob = world.register("bob123").await;

        let secret = [7u8; 32];
        let app = social_router_generic(
            world.users.clone(),
            world.store.clone(),
            AuthConfig::with_secret(secret),
        );
        let token = TokenService::new(Arc::new(AuthConfig::with_secret(secret)))
            .issue(bob.user_id)
            .unwrap()
            .token;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/follow/alice1")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/profile/alice1")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["isFollowing"], true);
        assert_eq!(body["counts"]["followers"], 1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/profile/alice1/followers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["profile"]["isFollowing"], false);
        assert_eq!(body["users"][0]["username"], "bob123");
    }

    #[tokio::test]
    async fn test_follow_requires_token() {
        let world = World::new();
        world.register("alice1").await;
        let app = social_router_generic(
            world.users.clone(),
            world.store.clone(),
            AuthConfig::with_random_secret(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/follow/alice1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_profile_is_not_found() {
        let world = World::new();
        let app = social_router_generic(
            world.users.clone(),
            world.store.clone(),
            AuthConfig::with_random_secret(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/profile/ghost1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
