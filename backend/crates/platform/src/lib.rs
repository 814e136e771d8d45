//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random secrets)
//! - Signed token codec (HMAC-SHA256 over an opaque payload)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - HTTP header helpers (bearer tokens)

pub mod crypto;
pub mod headers;
pub mod password;
pub mod signed_token;
