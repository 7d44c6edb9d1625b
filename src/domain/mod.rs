//! Domain layer
//!
//! The user entity, its field rules and the repository interface the
//! application layer talks to.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult, ValidationError};
pub use user::{
    AgeInput, CreateUserDto, NewUser, UpdateUserDto, User, UserRepositoryInterface, UserRole,
};
