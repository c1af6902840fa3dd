//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entities;
pub mod repository;

// Re-exports
pub use entities::{FollowEdge, ProfileCounts, ProfileView};
pub use repository::{FollowRepository, PostRepository};
