//! Application Layer
//!
//! Use cases and application services.

pub mod availability;
pub mod config;
pub mod find_user;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use availability::AvailabilityUseCase;
pub use config::AuthConfig;
pub use find_user::FindUserUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase, TokenLoginOutput};
pub use register::{RegisterOutput, RegisterUseCase};
pub use token::{IssuedToken, TokenService};
