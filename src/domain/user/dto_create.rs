use super::validation::{validate_age_input, validate_email};
use super::{AgeInput, UserRole};
use crate::domain::ValidationError;

/// Raw create input. Every field may be absent; `validate` decides.
#[derive(Debug, Clone, Default)]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub age: Option<AgeInput>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// A create request that passed validation, still waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    pub email: String,
    pub role: UserRole,
}

impl CreateUserDto {
    /// Runs presence, age range, role and email checks in that order.
    ///
    /// Presence treats an empty string and an age of `0` as missing.
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        let name = self.name.filter(|name| !name.is_empty());
        let age = self.age.filter(|age| *age != AgeInput::Whole(0));
        let email = self.email.filter(|email| !email.is_empty());
        let role = self.role.filter(|role| !role.is_empty());

        let (Some(name), Some(age), Some(email), Some(role)) = (name, age, email, role) else {
            return Err(ValidationError::MissingFields);
        };

        let age = validate_age_input(age)?;
        let role = role.parse::<UserRole>()?;
        validate_email(&email)?;

        Ok(NewUser {
            name,
            age,
            email,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateUserDto {
        CreateUserDto {
            name: Some("Ann".into()),
            age: Some(AgeInput::Whole(30)),
            email: Some("ann@x.com".into()),
            role: Some("viewer".into()),
        }
    }

    #[test]
    fn valid_input_passes() {
        let user = valid_dto().validate().unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.age, 30);
        assert_eq!(user.email, "ann@x.com");
        assert_eq!(user.role, UserRole::Viewer);
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let cases = [
            CreateUserDto { name: None, ..valid_dto() },
            CreateUserDto { name: Some(String::new()), ..valid_dto() },
            CreateUserDto { age: None, ..valid_dto() },
            CreateUserDto { age: Some(AgeInput::Whole(0)), ..valid_dto() },
            CreateUserDto { email: Some(String::new()), ..valid_dto() },
            CreateUserDto { role: None, ..valid_dto() },
        ];

        for dto in cases {
            assert_eq!(dto.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn presence_is_checked_before_everything_else() {
        let dto = CreateUserDto {
            name: None,
            age: Some(AgeInput::Whole(10)),
            email: Some("bad".into()),
            role: Some("root".into()),
        };
        assert_eq!(dto.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn age_is_checked_before_role_and_email() {
        let dto = CreateUserDto {
            age: Some(AgeInput::Whole(10)),
            email: Some("bad".into()),
            role: Some("root".into()),
            ..valid_dto()
        };
        assert_eq!(dto.validate(), Err(ValidationError::AgeOutOfRange));
    }

    #[test]
    fn role_is_checked_before_email() {
        let dto = CreateUserDto {
            email: Some("bad".into()),
            role: Some("root".into()),
            ..valid_dto()
        };
        assert_eq!(dto.validate(), Err(ValidationError::InvalidRole));
    }

    #[test]
    fn email_is_checked_last() {
        let dto = CreateUserDto {
            email: Some("noatsign.com".into()),
            ..valid_dto()
        };
        assert_eq!(dto.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn non_whole_age_is_present_but_out_of_range() {
        let dto = CreateUserDto {
            age: Some(AgeInput::NotWhole),
            role: Some("root".into()),
            ..valid_dto()
        };
        assert_eq!(dto.validate(), Err(ValidationError::AgeOutOfRange));
    }

    #[test]
    fn age_boundaries() {
        for (age, ok) in [(17, false), (18, true), (65, true), (66, false)] {
            let dto = CreateUserDto { age: Some(AgeInput::Whole(age)), ..valid_dto() };
            assert_eq!(dto.validate().is_ok(), ok, "age {age}");
        }
    }
}
