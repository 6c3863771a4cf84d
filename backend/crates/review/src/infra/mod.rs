//! Infrastructure Layer
//!
//! Repository implementations and seed data.

pub mod memory;
pub mod seed;

pub use memory::InMemorySubmissionRepository;
pub use seed::{load_seed_file, parse_seed, reference_seed};
