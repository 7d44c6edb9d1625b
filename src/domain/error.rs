//! Domain errors

use thiserror::Error;

/// Field check failures, in the order the checks run on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required fields")]
    MissingFields,

    #[error("age must be between 18 and 65")]
    AgeOutOfRange,

    #[error("role must be one of admin, editor, viewer")]
    InvalidRole,

    #[error("invalid email format")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn user_not_found(id: &str) -> Self {
        DomainError::NotFound {
            entity: "User",
            field: "id",
            value: id.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
