//! Application Layer
//!
//! Use cases and application services.

pub mod check_access;
pub mod config;
pub mod delete_user;
pub mod refresh;
pub mod sign_in;
pub mod sign_up;
pub mod token_service;

// Re-exports
pub use check_access::CheckAccessUseCase;
pub use config::AuthConfig;
pub use delete_user::DeleteUserUseCase;
pub use refresh::RefreshUseCase;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token_service::TokenService;
