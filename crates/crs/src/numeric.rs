use serde::{Deserialize, Deserializer};

/// Rounds to the nearest integer, saturating at the `i32` bounds. NaN maps to zero.
pub(crate) fn round_to_i32(value: f64) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let rounded = value.round();
    if rounded >= i32::MAX as f64 {
        i32::MAX
    } else if rounded <= i32::MIN as f64 {
        i32::MIN
    } else {
        rounded as i32
    }
}

pub(crate) fn clamp_to_u8(value: i32, max: u8) -> u8 {
    value.clamp(0, i32::from(max)) as u8
}

/// Accepts any JSON/CSV number for an integer field and rounds it.
pub(crate) fn deserialize_rounded<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(round_to_i32(raw))
}

pub(crate) fn deserialize_optional_rounded<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(round_to_i32))
}
