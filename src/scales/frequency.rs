//! Waveform frequencies paired with shape breakpoints.
//!
//! Frequencies grow as `3·2^i` so that neighbouring breakpoints give clearly
//! different ripple counts. The breakpoint at (or structurally nearest to)
//! zero gets frequency 0, the plain circle.

use crate::utils::numeric::is_negative;
use crate::{GlyphError, GlyphResult};

/// One frequency per shape breakpoint, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyScale(Vec<u32>);

impl FrequencyScale {
    /// The frequencies.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Frequency at `index`.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Number of frequencies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no frequencies.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u32]> for FrequencyScale {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

fn ripple(i: u32) -> Option<u32> {
    2u32.checked_pow(i)?.checked_mul(3)
}

/// Builds the frequency scale for a shape scale's breakpoints.
///
/// - divergent: rising frequencies away from the central zero in both directions
/// - all breakpoints non-positive: falling frequencies ending in zero
/// - otherwise: zero followed by rising frequencies
///
/// # Errors
/// `InvalidParameter` when the breakpoints need a frequency beyond `u32::MAX`,
/// which happens from 33 (non-divergent) or 64 (divergent) breakpoints on.
pub fn frequency_scale(breakpoints: &[f64], divergent: bool) -> GlyphResult<FrequencyScale> {
    let n = breakpoints.len();
    let steps = if divergent { n / 2 } else { n.saturating_sub(1) };
    let rising: Vec<u32> = u32::try_from(steps)
        .ok()
        .and_then(|steps| (0..steps).map(ripple).collect())
        .ok_or_else(|| {
            GlyphError::invalid_parameter(
                "shape_n",
                format!("{n} breakpoints need frequencies beyond {}", u32::MAX),
            )
        })?;

    let mut frequencies = Vec::with_capacity(n);
    if divergent {
        frequencies.extend(rising.iter().rev());
        frequencies.push(0);
        frequencies.extend(&rising);
    } else if is_negative(breakpoints) {
        frequencies.extend(rising.iter().rev());
        frequencies.push(0);
    } else {
        frequencies.push(0);
        frequencies.extend(&rising);
    }

    Ok(FrequencyScale(frequencies))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divergent_frequencies_mirror() {
        let shape = [-4.0, -2.7, -1.3, 0.0, 1.3, 2.7, 4.0];
        let freq = frequency_scale(&shape, true).unwrap();
        assert_eq!(freq.as_slice(), &[12, 6, 3, 0, 3, 6, 12]);
        assert_eq!(freq.len(), shape.len());
    }

    #[test]
    fn test_negative_frequencies_end_at_zero() {
        let shape = [-4.0, -3.0, -2.0, -1.0, 0.0];
        let freq = frequency_scale(&shape, false).unwrap();
        assert_eq!(freq.as_slice(), &[24, 12, 6, 3, 0]);
    }

    #[test]
    fn test_normal_frequencies_start_at_zero() {
        let shape = [0.0, 0.5, 1.0, 1.5, 2.0];
        let freq = frequency_scale(&shape, false).unwrap();
        assert_eq!(freq.as_slice(), &[0, 3, 6, 12, 24]);
    }

    #[test]
    fn test_zero_slot_aligns_with_zero_breakpoint() {
        for (shape, divergent) in [
            (vec![-2.0, -1.0, 0.0, 1.0, 2.0], true),
            (vec![-3.0, -1.5, 0.0], false),
            (vec![0.0, 1.0, 2.0], false),
        ] {
            let freq = frequency_scale(&shape, divergent).unwrap();
            let zero_at = shape.iter().position(|&v| v == 0.0).unwrap();
            assert_eq!(freq.get(zero_at), Some(0));
        }
    }

    #[test]
    fn test_single_breakpoint() {
        assert_eq!(frequency_scale(&[0.0], true).unwrap().as_slice(), &[0]);
        assert_eq!(frequency_scale(&[2.0], false).unwrap().as_slice(), &[0]);
    }

    #[test]
    fn test_frequency_overflow_is_an_error() {
        let shape: Vec<f64> = (0..32).map(f64::from).collect();
        let freq = frequency_scale(&shape, false).unwrap();
        assert_eq!(freq.get(31), Some(3 * 2u32.pow(30)));

        let shape: Vec<f64> = (0..40).map(f64::from).collect();
        assert!(matches!(
            frequency_scale(&shape, false),
            Err(GlyphError::InvalidParameter { ref parameter, .. }) if parameter == "shape_n"
        ));
        let shape: Vec<f64> = (-32..=32).map(f64::from).collect();
        assert!(frequency_scale(&shape, true).is_err());
    }

    #[test]
    fn test_maximum_scale_length() {
        let shape: Vec<f64> = (0..7).map(f64::from).collect();
        let freq = frequency_scale(&shape, false).unwrap();
        assert_eq!(freq.get(6), Some(96));
    }
}
