//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AgeInput, CreateUserDto, UpdateUserDto, User};
use crate::shared::serde_helpers::{lenient_age, lenient_age_patch};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    /// Generated UUID-v4-shaped identifier
    pub id: String,
    pub name: String,
    /// 18 to 65 inclusive
    pub age: i64,
    pub email: String,
    /// admin, editor or viewer
    pub role: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            age: u.age,
            email: u.email,
            role: u.role.as_str().to_string(),
        }
    }
}

/// Create user request. All four fields are required; an `id` in the body
/// is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    /// A whole number; `30.0` reads as `30`
    #[serde(default, deserialize_with = "lenient_age")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<AgeInput>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<CreateUserRequest> for CreateUserDto {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            name: r.name,
            age: r.age,
            email: r.email,
            role: r.role,
        }
    }
}

/// Update user request. Absent fields are left untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    /// An explicit `null` is treated as an out-of-range age
    #[serde(default, deserialize_with = "lenient_age_patch")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Option<AgeInput>>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserDto {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            name: r.name,
            age: r.age,
            email: r.email,
            role: r.role,
        }
    }
}
