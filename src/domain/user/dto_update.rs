use super::AgeInput;

/// Partial update input.
///
/// `age` is doubly optional: `None` means the key was absent, `Some(None)`
/// means it was sent as an explicit null.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub age: Option<Option<AgeInput>>,
    pub email: Option<String>,
    pub role: Option<String>,
}
