//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary shared by
//! the identity and social crates:
//! - Common error types and result aliases
//! - Typed identifiers (`UserId`)
//!
//! Only things with a consistent meaning across every domain live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
