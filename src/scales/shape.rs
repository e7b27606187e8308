//! Shape scale construction.
//!
//! The distribution of the shape values selects one of three policies:
//!
//! - [`ShapePolicy::Divergent`]: mirrored around zero. `count` is the number
//!   of breakpoints on each side including zero, so the scale holds
//!   `2·count − 1` values.
//! - [`ShapePolicy::Negative`]: every value is non-positive and one is
//!   negative. The scale climbs towards an upper bound of zero.
//! - [`ShapePolicy::Normal`]: everything else. The scale climbs from zero (or
//!   the data minimum) upwards.

use tracing::{debug, warn};

use super::bounds::{
    ScaleSpec, resolve_divergent_bounds, resolve_negative_bounds, resolve_normal_bounds,
};
use super::{Scale, linear_breakpoints};
use crate::utils::numeric::{DataStats, is_negative};
use crate::{GlyphResult, ScaleAxis};

/// Largest number of shape breakpoints (per side, for divergent scales).
pub const MAX_SHAPE_COUNT: usize = 7;
/// Shape breakpoint count when none is given.
pub const DEFAULT_SHAPE_COUNT: usize = 5;
/// Shape breakpoint count per side of a divergent scale when none is given.
pub const DEFAULT_DIVERGENT_SHAPE_COUNT: usize = 4;

/// How the breakpoints of a shape scale are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePolicy {
    /// Mirrored around zero.
    Divergent,
    /// Non-positive values only.
    Negative,
    /// Mixed or non-negative values.
    Normal,
}

impl ShapePolicy {
    /// Chooses the policy for `values`. An explicit divergent request always wins.
    pub fn select(divergent: bool, values: &[f64]) -> Self {
        if divergent {
            ShapePolicy::Divergent
        } else if is_negative(values) {
            ShapePolicy::Negative
        } else {
            ShapePolicy::Normal
        }
    }

    /// True for [`ShapePolicy::Divergent`].
    pub const fn is_divergent(self) -> bool {
        matches!(self, ShapePolicy::Divergent)
    }
}

/// A shape scale and how it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeScale {
    scale: Scale,
    policy: ShapePolicy,
    count: usize,
    clamped_from: Option<usize>,
}

impl ShapeScale {
    /// The underlying scale.
    pub const fn scale(&self) -> &Scale {
        &self.scale
    }

    /// The breakpoints in ascending order.
    pub fn breakpoints(&self) -> &[f64] {
        self.scale.breakpoints()
    }

    /// Total number of breakpoints.
    pub fn len(&self) -> usize {
        self.scale.len()
    }

    /// Never true for a built scale.
    pub fn is_empty(&self) -> bool {
        self.scale.is_empty()
    }

    /// Policy used to distribute the breakpoints.
    pub const fn policy(&self) -> ShapePolicy {
        self.policy
    }

    /// Resolved breakpoint count (per side for divergent scales).
    pub const fn count(&self) -> usize {
        self.count
    }

    /// The requested count, when it exceeded [`MAX_SHAPE_COUNT`] and was clamped.
    pub const fn clamped_from(&self) -> Option<usize> {
        self.clamped_from
    }

    /// Whether the bounds leave some observed values outside the scale.
    pub const fn excludes_data(&self) -> bool {
        self.scale.excludes_data()
    }
}

impl AsRef<[f64]> for ShapeScale {
    fn as_ref(&self) -> &[f64] {
        self.scale.breakpoints()
    }
}

/// Builds the shape scale for `values`.
///
/// # Errors
/// - `values` is empty or holds non-finite entries
/// - `spec` fails [`ScaleSpec::validate`], e.g. explicit `min >= max`
pub fn shape_scale(
    values: &[f64],
    spec: &ScaleSpec,
    divergent: bool,
    decimals: i32,
) -> GlyphResult<ShapeScale> {
    spec.validate(ScaleAxis::Shape)?;
    let stats = DataStats::of(values)?;
    let policy = ShapePolicy::select(divergent, values);

    let (count, clamped_from) = match spec.count {
        Some(n) if n > MAX_SHAPE_COUNT => {
            warn!(requested = n, "Maximum number of shapes is {MAX_SHAPE_COUNT}.");
            (MAX_SHAPE_COUNT, Some(n))
        }
        Some(n) => (n, None),
        None if policy.is_divergent() => (DEFAULT_DIVERGENT_SHAPE_COUNT, None),
        None => (DEFAULT_SHAPE_COUNT, None),
    };

    let bounds_spec = spec.bounds();
    let (bounds, breakpoints) = match policy {
        ShapePolicy::Divergent => {
            let bounds = resolve_divergent_bounds(bounds_spec, &stats)?;
            // zero and below, then strictly above zero
            let below = linear_breakpoints(0.0, bounds.min, (0..count).rev(), count, decimals);
            let above = linear_breakpoints(0.0, bounds.max, 1..count, count, decimals);
            (bounds, below.chain(above).collect::<Vec<_>>())
        }
        ShapePolicy::Negative => {
            let bounds = resolve_negative_bounds(bounds_spec, &stats)?;
            let spread = (bounds.max - bounds.min).abs();
            let points = linear_breakpoints(bounds.max, -spread, (0..count).rev(), count, decimals);
            (bounds, points.collect())
        }
        ShapePolicy::Normal => {
            let bounds = resolve_normal_bounds(bounds_spec, &stats)?;
            let spread = bounds.max - bounds.min;
            let points = linear_breakpoints(bounds.min, spread, 0..count, count, decimals);
            (bounds, points.collect())
        }
    };

    let excludes_data = bounds.excludes(&stats);
    if excludes_data {
        warn!(
            min = bounds.min,
            max = bounds.max,
            "specified minimum and maximum shape scale values or specified shape scale spread exclude some data"
        );
    }
    debug!(?policy, ?breakpoints, "shape scale");

    Ok(ShapeScale {
        scale: Scale::new(breakpoints, bounds, excludes_data),
        policy,
        count,
        clamped_from,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GlyphError;

    #[test]
    fn test_policy_selection() {
        assert_eq!(ShapePolicy::select(true, &[1.0, 2.0]), ShapePolicy::Divergent);
        assert_eq!(ShapePolicy::select(false, &[-1.0, 0.0]), ShapePolicy::Negative);
        assert_eq!(ShapePolicy::select(false, &[-1.0, 1.0]), ShapePolicy::Normal);
        assert_eq!(ShapePolicy::select(false, &[0.0, 0.0]), ShapePolicy::Normal);
    }

    #[test]
    fn test_divergent_scale_is_symmetric() {
        let scale = shape_scale(&[-3.0, 0.5, 4.0], &ScaleSpec::new(), true, 1).unwrap();
        let points = scale.breakpoints();

        assert_eq!(scale.count(), DEFAULT_DIVERGENT_SHAPE_COUNT);
        assert_eq!(points.len(), 2 * scale.count() - 1);
        assert_eq!(points, &[-4.0, -2.7, -1.3, 0.0, 1.3, 2.7, 4.0]);

        let mid = points.len() / 2;
        assert_eq!(points[mid], 0.0);
        for i in 1..=mid {
            assert_eq!(points[mid + i], -points[mid - i]);
        }
    }

    #[test]
    fn test_divergent_with_explicit_asymmetric_bounds() {
        let spec = ScaleSpec::new().with_min(-2.0).with_max(6.0).with_count(3);
        let scale = shape_scale(&[-1.0, 1.0], &spec, true, 1).unwrap();
        assert_eq!(scale.breakpoints(), &[-2.0, -1.0, 0.0, 3.0, 6.0]);
    }

    #[test]
    fn test_divergent_single_count_is_zero() {
        let scale = shape_scale(&[-1.0, 1.0], &ScaleSpec::new().with_count(1), true, 1).unwrap();
        assert_eq!(scale.breakpoints(), &[0.0]);
    }

    #[test]
    fn test_negative_scale_ascends_to_zero() {
        let scale = shape_scale(&[-4.0, -1.0, 0.0], &ScaleSpec::new(), false, 1).unwrap();
        assert_eq!(scale.policy(), ShapePolicy::Negative);
        assert_eq!(scale.breakpoints(), &[-4.0, -3.0, -2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_negative_single_count_is_upper_bound() {
        let scale =
            shape_scale(&[-4.0, -1.0], &ScaleSpec::new().with_count(1), false, 1).unwrap();
        assert_eq!(scale.breakpoints(), &[0.0]);
    }

    #[test]
    fn test_normal_scale_defaults() {
        let scale = shape_scale(&[0.2, 0.9, 2.0], &ScaleSpec::new(), false, 1).unwrap();
        assert_eq!(scale.policy(), ShapePolicy::Normal);
        assert_eq!(scale.breakpoints(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(!scale.excludes_data());
    }

    #[test]
    fn test_normal_scale_mixed_values_start_at_data_min() {
        let scale =
            shape_scale(&[-1.0, 3.0], &ScaleSpec::new().with_count(5), false, 1).unwrap();
        assert_eq!(scale.breakpoints(), &[-1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_count_is_clamped() {
        let scale =
            shape_scale(&[0.0, 1.0], &ScaleSpec::new().with_count(12), false, 2).unwrap();
        assert_eq!(scale.len(), MAX_SHAPE_COUNT);
        assert_eq!(scale.clamped_from(), Some(12));

        let scale = shape_scale(&[-1.0, 1.0], &ScaleSpec::new().with_count(9), true, 2).unwrap();
        assert_eq!(scale.len(), 2 * MAX_SHAPE_COUNT - 1);
    }

    #[test]
    fn test_exclusion_is_flagged() {
        let spec = ScaleSpec::new().with_max(1.0);
        let scale = shape_scale(&[0.0, 5.0], &spec, false, 1).unwrap();
        assert!(scale.excludes_data());
    }

    #[test]
    fn test_explicit_bounds_rejected_in_every_policy() {
        let spec = ScaleSpec::new().with_min(1.0).with_max(-1.0);
        for (values, divergent) in [
            (&[-1.0, 1.0][..], true),
            (&[-1.0, -2.0][..], false),
            (&[1.0, 2.0][..], false),
        ] {
            let err = shape_scale(values, &spec, divergent, 1).unwrap_err();
            assert!(matches!(
                err,
                GlyphError::InvalidRange {
                    axis: ScaleAxis::Shape,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_deterministic() {
        let values = [-2.2, 0.7, 3.3];
        let spec = ScaleSpec::new().with_spread(5.0);
        let a = shape_scale(&values, &spec, true, 2).unwrap();
        let b = shape_scale(&values, &spec, true, 2).unwrap();
        assert_eq!(a.breakpoints(), b.breakpoints());
    }
}
