//! Discrete colour, shape and frequency scales.
//!
//! A scale is an ordered list of breakpoints, rounded to a fixed number of
//! decimal places. The breakpoints label the legend and are the targets of
//! value classification. Scales are built once per plot and never mutated.

pub mod bounds;
pub mod colour;
pub mod frequency;
pub mod shape;

pub use bounds::{BoundsSpec, ResolvedBounds, ScaleSpec};
pub use colour::{DEFAULT_COLOUR_COUNT, colour_scale};
pub use frequency::{FrequencyScale, frequency_scale};
pub use shape::{MAX_SHAPE_COUNT, ShapePolicy, ShapeScale, shape_scale};

use crate::utils::numeric::{fraction, round_to};

/// An ordered sequence of breakpoints together with the bounds it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    breakpoints: Vec<f64>,
    bounds: ResolvedBounds,
    excludes_data: bool,
}

impl Scale {
    pub(crate) const fn new(breakpoints: Vec<f64>, bounds: ResolvedBounds, excludes_data: bool) -> Self {
        Self {
            breakpoints,
            bounds,
            excludes_data,
        }
    }

    /// The breakpoints, in scale order.
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// True for a scale without breakpoints. Builders never produce one.
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// The resolved, unrounded bounds.
    pub const fn bounds(&self) -> ResolvedBounds {
        self.bounds
    }

    /// Whether the bounds leave some observed values outside the scale.
    pub const fn excludes_data(&self) -> bool {
        self.excludes_data
    }

    /// Smallest breakpoint.
    pub fn min_breakpoint(&self) -> Option<f64> {
        self.breakpoints.iter().copied().reduce(f64::min)
    }

    /// Largest breakpoint.
    pub fn max_breakpoint(&self) -> Option<f64> {
        self.breakpoints.iter().copied().reduce(f64::max)
    }
}

impl AsRef<[f64]> for Scale {
    fn as_ref(&self) -> &[f64] {
        &self.breakpoints
    }
}

/// `start + spread · i / (count - 1)` for each index, rounded to `decimals` places.
pub(crate) fn linear_breakpoints(
    start: f64,
    spread: f64,
    indices: impl Iterator<Item = usize>,
    count: usize,
    decimals: i32,
) -> impl Iterator<Item = f64> {
    indices.map(move |i| round_to(start + spread * fraction(i, count), decimals))
}
