//! Serde helpers for request bodies

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::domain::AgeInput;

/// Reads an age from any JSON value; `null` → `None`.
///
/// Use together with `#[serde(default)]`. Never fails, so a badly typed age
/// reaches the range check instead of rejecting the whole body.
pub fn lenient_age<'de, D>(deserializer: D) -> Result<Option<AgeInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(age_from_value)
}

/// [`lenient_age`] for patches, keeping an explicit `null` apart from an
/// absent key: absent → `None`, `null` → `Some(None)`.
pub fn lenient_age_patch<'de, D>(deserializer: D) -> Result<Option<Option<AgeInput>>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_age(deserializer).map(Some)
}

fn age_from_value(value: Value) -> Option<AgeInput> {
    let age = match value {
        Value::Null => return None,
        Value::Number(n) => whole_number(&n).map_or(AgeInput::NotWhole, AgeInput::Whole),
        // Falsy values count as zero: missing on create, out of range on update.
        Value::Bool(false) => AgeInput::Whole(0),
        Value::String(s) if s.is_empty() => AgeInput::Whole(0),
        _ => AgeInput::NotWhole,
    };
    Some(age)
}

/// Integer value of `n`, accepting floats with no fractional part.
fn whole_number(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then_some(f as i64)
}
