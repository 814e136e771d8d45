//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - The uniform response envelope used by every API route
//! - Common primitive value objects (ID types, authenticated principal)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod envelope;
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
pub mod principal;

pub use envelope::Envelope;
pub use principal::Principal;
