use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{validate_age_input, validate_email};
use super::UpdateUserDto;
use crate::domain::ValidationError;

/// Youngest accepted age (inclusive).
pub const MIN_AGE: i64 = 18;
/// Oldest accepted age (inclusive).
pub const MAX_AGE: i64 = 65;

/// Age as read from a request body, before the range check.
///
/// A whole JSON number (`30` or `30.0`) is `Whole`. A fractional number or
/// a value of another type is `NotWhole` and always fails the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeInput {
    Whole(i64),
    NotWhole,
}

impl From<i64> for AgeInput {
    fn from(age: i64) -> Self {
        AgeInput::Whole(age)
    }
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Editor, UserRole::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the three role names.
impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or(ValidationError::InvalidRole)
    }
}

/// User model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// Apply a partial update field by field (name, age, email, role).
    ///
    /// Each supplied field is validated right before it is assigned, and the
    /// first failure returns immediately. Fields assigned before the failing
    /// one stay assigned.
    pub fn apply_update(&mut self, dto: UpdateUserDto) -> Result<(), ValidationError> {
        if let Some(name) = dto.name.filter(|name| !name.is_empty()) {
            self.name = name;
        }

        if let Some(age) = dto.age {
            // An explicit null fails the range check like any other bad age.
            let age = age.ok_or(ValidationError::AgeOutOfRange)?;
            self.age = validate_age_input(age)?;
        }

        if let Some(email) = dto.email.filter(|email| !email.is_empty()) {
            validate_email(&email)?;
            self.email = email;
        }

        if let Some(role) = dto.role.filter(|role| !role.is_empty()) {
            self.role = role.parse()?;
        }

        Ok(())
    }
}
