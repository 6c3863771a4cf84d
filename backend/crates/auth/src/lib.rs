//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, credential value object, session repository trait
//! - `application/` - Sign in/out use cases and the [`SessionGate`]
//! - `infra/` - In-memory session slot
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Session Model
//! - A single fixed admin credential pair (`admin` / `admin123`)
//! - At most one authenticated session per process
//! - Cookie tokens are the session id plus an HMAC-SHA256 tag; a token is
//!   only honoured while its id names the current session

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::{AuthConfig, SessionGate};
pub use domain::{AdminSession, SessionUser};
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemorySessionRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
