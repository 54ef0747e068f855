//! # Quantity Rounding
//!
//! The purchasing convention shared by every estimator:
//!
//! 1. compute a continuous physical quantity,
//! 2. multiply by `1 + wastage / 100`,
//! 3. ceiling-round to the smallest purchasable unit.
//!
//! Step 3 always goes through [`ceil_safe`], which first rounds to
//! [`CEIL_PRECISION_DP`] decimal places. Without it, `6 / 0.18 * 1.05`
//! evaluates to `35.00000000000001` and would buy a 36th tile.
//!
//! ```rust
//! use trowel_core::rounding::{ceil_safe, wastage_multiplier};
//!
//! assert_eq!(ceil_safe(6.0 / 0.18 * wastage_multiplier(5.0)).unwrap(), 35);
//! assert_eq!(ceil_safe(30.8).unwrap(), 31);
//! assert_eq!(ceil_safe(0.0).unwrap(), 0);
//! assert!(ceil_safe(6.0e12).is_err());
//! ```

use crate::errors::{CalcError, CalcResult};

/// Decimal places kept before taking a ceiling
pub const CEIL_PRECISION_DP: i32 = 10;

/// Message used whenever a generic wastage percentage is out of range
pub const WASTAGE_RANGE_MESSAGE: &str = "Wastage must be between 0 and 100.";

/// Message used when a count does not fit in a `u32`
pub const COUNT_OVERFLOW_MESSAGE: &str = "Quantity is too large to count.";

/// Round `value` to `dp` decimal places (half away from zero).
pub fn round_to(value: f64, dp: i32) -> f64 {
    let factor = 10f64.powi(dp);
    (value * factor).round() / factor
}

/// Ceiling to a whole count after suppressing IEEE-754 accumulation error.
///
/// Negative and NaN inputs yield zero.
///
/// # Errors
///
/// `InvalidInput` on field `quantity` when the count is infinite or above
/// `u32::MAX`.
pub fn ceil_safe(value: f64) -> CalcResult<u32> {
    let rounded = round_to(value, CEIL_PRECISION_DP).ceil();
    if rounded.is_nan() || rounded <= 0.0 {
        Ok(0)
    } else if rounded > f64::from(u32::MAX) {
        Err(CalcError::invalid_input("quantity", value.to_string(), COUNT_OVERFLOW_MESSAGE))
    } else {
        Ok(rounded as u32)
    }
}

/// Sum counts, failing instead of wrapping past `u32::MAX`.
pub fn sum_counts(counts: impl IntoIterator<Item = u32>) -> CalcResult<u32> {
    counts.into_iter().try_fold(0u32, |total, n| {
        total.checked_add(n).ok_or_else(|| {
            CalcError::invalid_input("quantity", format!("{} + {}", total, n), COUNT_OVERFLOW_MESSAGE)
        })
    })
}

/// `1 + percent / 100`
pub fn wastage_multiplier(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// Number of whole packages of `package_size` needed to hold `quantity`.
pub fn packages_needed(quantity: f64, package_size: f64) -> CalcResult<u32> {
    ceil_safe(quantity / package_size)
}

/// Reject anything that is not strictly positive (NaN included).
pub fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

/// Reject negative values (zero is allowed).
pub fn require_non_negative(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

/// Reject a percentage outside `[0, 100]`.
pub fn require_percentage(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

/// [`require_percentage`] with the generic wastage message.
pub fn require_wastage(field: &str, value: f64) -> CalcResult<()> {
    require_percentage(field, value, WASTAGE_RANGE_MESSAGE)
}
