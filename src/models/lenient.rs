//! Forgiving number readers for stored records.
//!
//! Saved collections may hold any JSON number in count fields (negative,
//! fractional) and `null` where a non-finite value was written.

use serde::{Deserialize, Deserializer};

/// Whole, non-negative count. Negative, `null` or non-finite become 0;
/// fractions are truncated.
pub(crate) fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(if value.is_finite() && value > 0.0 {
        value.min(u32::MAX as f64) as u32
    } else {
        0
    })
}

/// Amount or quantity. `null` reads as 0.
pub(crate) fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
