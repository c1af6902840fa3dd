//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the credential
//! validator.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{
    session::{SessionClaim, TokenClaims},
    user::{NewUser, User, UserIdentity},
};
pub use repository::UserRepository;
pub use services::{CredentialFailure, CredentialValidator, RegistrationInput, ValidationReport};
