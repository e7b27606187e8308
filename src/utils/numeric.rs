//! Small numeric helpers shared by the scale builders.

use crate::{GlyphError, GlyphResult};

/// Rounds `value` to `decimals` decimal places, resolving ties to the even neighbour.
///
/// Negative `decimals` round to tens, hundreds and so on.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round_ties_even() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round_ties_even() * factor
    }
}

/// Position of breakpoint `i` within a scale of `count` breakpoints, in `[0, 1]`.
///
/// A single-breakpoint scale has nowhere to go, so its only breakpoint sits at 0.
pub fn fraction(i: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        i as f64 / (count - 1) as f64
    }
}

/// Of `a` and `b`, returns the one with the larger magnitude (sign preserved).
/// Ties go to `a`.
pub fn larger_magnitude(a: f64, b: f64) -> f64 {
    if b.abs() > a.abs() { b } else { a }
}

/// Summary statistics of a non-empty, finite column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataStats {
    /// Smallest observed value
    pub min: f64,
    /// Largest observed value
    pub max: f64,
    /// First observed value with the largest magnitude (sign preserved)
    pub max_by_abs: f64,
}

impl DataStats {
    /// Computes the statistics of `values`.
    ///
    /// # Errors
    /// Returns an error if `values` is empty or contains a non-finite entry.
    pub fn of(values: &[f64]) -> GlyphResult<Self> {
        let first = *values
            .first()
            .ok_or_else(|| GlyphError::invalid_input("Empty input lists"))?;

        let mut stats = Self {
            min: first,
            max: first,
            max_by_abs: first,
        };
        for &v in values {
            if !v.is_finite() {
                return Err(GlyphError::invalid_input(format!(
                    "scale values must be finite numbers, found {v}"
                )));
            }
            stats.min = stats.min.min(v);
            stats.max = stats.max.max(v);
            stats.max_by_abs = larger_magnitude(stats.max_by_abs, v);
        }
        Ok(stats)
    }

    /// Magnitude of the largest-magnitude value.
    pub fn max_abs(&self) -> f64 {
        self.max_by_abs.abs()
    }
}

/// True when the values straddle zero: at least one negative and one positive.
pub fn is_divergent(values: &[f64]) -> bool {
    values.iter().any(|&v| v < 0.0) && values.iter().any(|&v| v > 0.0)
}

/// True when at least one value is negative and none is positive.
pub fn is_negative(values: &[f64]) -> bool {
    values.iter().any(|&v| v < 0.0) && !values.iter().any(|&v| v > 0.0)
}
