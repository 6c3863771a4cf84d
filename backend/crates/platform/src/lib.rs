//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the domain crates:
//! - Cryptographic utilities (HMAC-SHA256, Base64, constant-time compare)
//! - Cookie management
pub mod cookie;
pub mod crypto;
