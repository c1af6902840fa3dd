//! API DTOs (Data Transfer Objects)

pub use crate::application::ProfilePage;
pub use crate::domain::entities::{ProfileCounts, ProfileView};

use serde::Serialize;

/// Follow / unfollow response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub username: String,
    pub is_following: bool,
}
