//! Application Layer
//!
//! Use cases and the session gate built from them.

pub mod check_session;
pub mod config;
pub mod gate;
pub mod sign_in;
pub mod sign_out;
pub mod token;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use gate::SessionGate;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
