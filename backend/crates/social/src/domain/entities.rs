//! Domain Entities

use auth::domain::entity::user::{User, UserIdentity};
use kernel::id::UserId;
use serde::Serialize;

/// Directed edge: `follower_id` follows `followed_id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    pub follower_id: UserId,
    pub followed_id: UserId,
}

impl FollowEdge {
    pub fn new(follower_id: UserId, followed_id: UserId) -> Self {
        Self {
            follower_id,
            followed_id,
        }
    }

    pub fn is_self_follow(&self) -> bool {
        self.follower_id == self.followed_id
    }
}

/// Post, follower and following counts of a profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileCounts {
    pub posts: u64,
    pub followers: u64,
    pub following: u64,
}

/// Composite profile record, as seen by one visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user: UserIdentity,
    /// Visitor is looking at their own profile
    pub is_own_profile: bool,
    /// Visitor follows the profile owner; always false for anonymous visitors
    pub is_following: bool,
    pub counts: ProfileCounts,
}

impl ProfileView {
    pub fn new(
        owner: &User,
        is_own_profile: bool,
        is_following: bool,
        counts: ProfileCounts,
    ) -> Self {
        Self {
            user: owner.identity(),
            is_own_profile,
            is_following,
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_follow_detection() {
        let a = UserId::new();
        let b = UserId::new();
        assert!(FollowEdge::new(a, a).is_self_follow());
        assert!(!FollowEdge::new(a, b).is_self_follow());
    }
}
