//! Record identifiers

use uuid::Uuid;

/// Random `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` token (lowercase hex,
/// variant nibble in `8..=b`). Unique with high probability only.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
