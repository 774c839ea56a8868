//! Conversion of computed money amounts to whole currency units.

use crate::CoreError;

/// 2^63. `i64::MAX as f64` rounds up to this value, so the bound is exclusive.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Rounds half away from zero and converts, refusing NaN, infinities, and
/// anything an `i64` cannot hold instead of letting the cast saturate.
pub(crate) fn whole_units(value: f64, label: &str) -> Result<i64, CoreError> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded >= I64_LIMIT || rounded < -I64_LIMIT {
        return Err(CoreError::AmountOutOfRange(format!(
            "{label} of {value} cannot be expressed in whole currency units"
        )));
    }
    Ok(rounded as i64)
}

/// Sums whole amounts, failing on overflow.
pub(crate) fn checked_total<I>(values: I, label: &str) -> Result<i64, CoreError>
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .try_fold(0_i64, i64::checked_add)
        .ok_or_else(|| CoreError::AmountOutOfRange(format!("{label} overflows")))
}
