// ABOUTME: Shared one-decimal rounding used by every analytics component
// ABOUTME: Round half away from zero on the scaled integer, applied uniformly

use crate::constants::weight_limits::DECIMAL_SCALE;

/// Round a value to one decimal place.
///
/// Scales by ten, rounds half away from zero, and scales back. This is the
/// single rounding rule for the whole engine: moving averages, period
/// statistics, and anomaly warnings all go through it, so create and read
/// paths can never disagree on a displayed value.
pub fn round1(value: f64) -> f64 {
    (value * DECIMAL_SCALE).round() / DECIMAL_SCALE
}

/// Whether a value already carries at most one fractional digit.
///
/// Uses the same scaled representation as [`round1`] so that a weight which
/// survives validation round-trips through the rounding rule unchanged.
pub fn has_single_decimal(value: f64) -> bool {
    let scaled = value * DECIMAL_SCALE;
    (scaled - scaled.round()).abs() < 1e-6
}
