//! Infrastructure layer - external concerns

pub mod seed;
pub mod storage;

pub use seed::{load_seed, load_seed_or_empty, SeedError};
pub use storage::InMemoryUserRepository;
