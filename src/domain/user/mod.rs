//! User aggregate
//!
//! Contains the User entity, DTOs, field validation and repository interface.

pub mod model;
pub mod repository;
pub mod validation;

mod dto_create;
mod dto_update;

// Re-export model types
pub use model::{AgeInput, User, UserRole, MAX_AGE, MIN_AGE};

// Re-export DTOs
pub use dto_create::{CreateUserDto, NewUser};
pub use dto_update::UpdateUserDto;

// Re-export repository trait
pub use repository::UserRepositoryInterface;
