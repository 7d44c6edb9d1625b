//! Field rules shared by create and update.

use std::sync::LazyLock;

use regex::Regex;

use super::{AgeInput, MAX_AGE, MIN_AGE};
use crate::domain::ValidationError;

/// Deliberately loose: `local@domain.tld`, no whitespace, one `@`.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn validate_age(age: i64) -> Result<i64, ValidationError> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(ValidationError::AgeOutOfRange)
    }
}

/// Range check for a request-supplied age; `NotWhole` never passes.
pub fn validate_age_input(age: AgeInput) -> Result<i64, ValidationError> {
    match age {
        AgeInput::Whole(age) => validate_age(age),
        AgeInput::NotWhole => Err(ValidationError::AgeOutOfRange),
    }
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_bounds_are_inclusive() {
        assert_eq!(validate_age(18), Ok(18));
        assert_eq!(validate_age(65), Ok(65));
        assert_eq!(validate_age(17), Err(ValidationError::AgeOutOfRange));
        assert_eq!(validate_age(66), Err(ValidationError::AgeOutOfRange));
        assert_eq!(validate_age(-30), Err(ValidationError::AgeOutOfRange));
    }

    #[test]
    fn age_input_requires_whole_number_in_range() {
        assert_eq!(validate_age_input(AgeInput::Whole(30)), Ok(30));
        assert_eq!(validate_age_input(AgeInput::Whole(70)), Err(ValidationError::AgeOutOfRange));
        assert_eq!(validate_age_input(AgeInput::NotWhole), Err(ValidationError::AgeOutOfRange));
    }

    #[test]
    fn email_accepts_minimal_address() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("ann@x.com").is_ok());
        assert!(validate_email("first.last@sub.domain.io").is_ok());
    }

    #[test]
    fn email_stays_permissive() {
        // Not RFC compliant, but accepted by the simple pattern.
        assert!(validate_email("a@b..c").is_ok());
        assert!(validate_email("\"quoted\"@x.y").is_ok());
        assert!(validate_email("用户@例子.中国").is_ok());
    }

    #[test]
    fn email_rejects_malformed() {
        for email in [
            "noatsign.com",
            "a@b",
            "@b.c",
            "a@.c",
            "a@b.",
            "a b@c.d",
            "a@b@c.d",
            "a@b.c ",
        ] {
            assert_eq!(
                validate_email(email),
                Err(ValidationError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }
}
