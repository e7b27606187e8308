//! Colour scale construction.

use tracing::{debug, warn};

use super::bounds::{ScaleSpec, resolve_colour_bounds};
use super::{Scale, linear_breakpoints};
use crate::utils::numeric::DataStats;
use crate::{GlyphResult, ScaleAxis};

/// Number of colour breakpoints when the caller gives none.
pub const DEFAULT_COLOUR_COUNT: usize = 5;

/// Builds the colour scale for `values`.
///
/// Breakpoints run from the resolved minimum to the resolved maximum in equal
/// steps, `spec.count` of them ([`DEFAULT_COLOUR_COUNT`] when unset). A single
/// breakpoint scale holds just the minimum. Bounds that exclude some of the
/// data are allowed but logged.
///
/// # Errors
/// - `values` is empty or holds non-finite entries
/// - `spec` fails [`ScaleSpec::validate`], e.g. explicit `min >= max`
pub fn colour_scale(values: &[f64], spec: &ScaleSpec, decimals: i32) -> GlyphResult<Scale> {
    spec.validate(ScaleAxis::Colour)?;
    let stats = DataStats::of(values)?;
    let bounds = resolve_colour_bounds(spec.bounds(), &stats)?;
    let count = spec.count.unwrap_or(DEFAULT_COLOUR_COUNT);

    let excludes_data = bounds.excludes(&stats);
    if excludes_data {
        warn!(
            min = bounds.min,
            max = bounds.max,
            "specified minimum and maximum colour scale values or specified colour scale spread exclude some data"
        );
    }

    let spread = bounds.max - bounds.min;
    let breakpoints: Vec<f64> =
        linear_breakpoints(bounds.min, spread, 0..count, count, decimals).collect();
    debug!(?breakpoints, "colour scale");

    Ok(Scale::new(breakpoints, bounds, excludes_data))
}
