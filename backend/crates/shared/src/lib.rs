//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `review` crates:
//! - Error taxonomy and result aliases
//! - Typed ID wrappers
//! - The notification channel both the session gate and the submission
//!   store report outcomes through
//!
//! **Design Principle**: Only include things that have a consistent meaning
//! across every domain crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod notify;
