use crate::error::{CogexError, Result};

/// Step used by [`round_to_step`] when callers have no better resolution.
pub const DEFAULT_STEP: f64 = 0.001;

/// Rounds every value to the nearest multiple of `step`.
///
/// Halfway cases round to the even multiple, so `0.0025` with a step of
/// `0.001` lands on `0.002`.
pub fn round_to_step(values: &[f64], step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CogexError::InvalidStep { step });
    }
    Ok(values
        .iter()
        .map(|v| (v / step).round_ties_even() * step)
        .collect())
}

/// Forces `value` into the inclusive range `[min, max]`.
///
/// The upper bound is applied first, so an inverted range yields `min`.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let capped = if max < value { max } else { value };
    if capped < min { min } else { capped }
}

/// Formats a fraction as a whole-number percentage, discarding decimals.
///
/// Large values are written out in full (`1e14` gives
/// `10000000000000000%`), never in exponent notation.
pub fn to_percent(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).trunc())
}
