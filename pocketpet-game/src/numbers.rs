//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

use crate::constants::{STAT_MAX, STAT_MIN};

/// Clamp a stat into the inclusive `[0, 100]` range, mapping NaN to the floor.
#[must_use]
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return STAT_MIN;
    }
    value.clamp(STAT_MIN, STAT_MAX)
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Floor a non-negative f64 into a u32, saturating at the bounds and returning 0 for NaN.
#[must_use]
pub fn floor_f64_to_u32(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    cast::<f64, u32>(value.floor()).unwrap_or(u32::MAX)
}

/// Round a f64 and clamp it to the i64 range, returning 0 for NaN values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    cast::<f64, i64>(value.clamp(min, max).round()).unwrap_or(0)
}

/// Number of whole `unit_ms` spans between `since` and `now`; never negative.
#[must_use]
pub fn elapsed_units(since_ms: i64, now_ms: i64, unit_ms: u64) -> u64 {
    if unit_ms == 0 {
        return 0;
    }
    let elapsed = now_ms.saturating_sub(since_ms);
    u64::try_from(elapsed).map_or(0, |ms| ms / unit_ms)
}
