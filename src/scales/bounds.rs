//! Resolution of scale bounds from user-supplied `{max, min, spread}`.
//!
//! A [`ScaleSpec`] is first reduced to a [`BoundsSpec`], which names which of
//! the bounds were supplied. Each scale policy then has one pure resolver that
//! maps a `BoundsSpec` plus the data statistics to concrete [`ResolvedBounds`].
//! Explicit bounds are validated before anything else is computed.

use serde::{Deserialize, Serialize};

use crate::utils::numeric::{DataStats, larger_magnitude};
use crate::{GlyphError, GlyphResult, ScaleAxis};

/// Optional, user-supplied description of one scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSpec {
    /// Largest scale value
    pub max: Option<f64>,
    /// Smallest scale value
    pub min: Option<f64>,
    /// Number of breakpoints
    pub count: Option<usize>,
    /// Total range covered by the scale; only its magnitude is used
    pub spread: Option<f64>,
}

impl ScaleSpec {
    /// A spec with nothing supplied: everything is derived from the data.
    pub const fn new() -> Self {
        Self {
            max: None,
            min: None,
            count: None,
            spread: None,
        }
    }

    /// Set the largest scale value.
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the smallest scale value.
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the number of breakpoints.
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the total range covered by the scale.
    pub const fn with_spread(mut self, spread: f64) -> Self {
        self.spread = Some(spread);
        self
    }

    /// Checks that every supplied number is usable.
    ///
    /// # Errors
    /// Returns an error for non-finite bounds or spread, for a zero count, and
    /// for explicit bounds with `min >= max`.
    pub fn validate(&self, axis: ScaleAxis) -> GlyphResult<()> {
        for (name, value) in [("max", self.max), ("min", self.min), ("spread", self.spread)] {
            if let Some(v) = value
                && !v.is_finite()
            {
                return Err(GlyphError::invalid_parameter(
                    format!("{axis}_{name}"),
                    format!("must be a finite number, found {v}"),
                ));
            }
        }
        if self.count == Some(0) {
            return Err(GlyphError::invalid_parameter(
                format!("{axis}_n"),
                "a scale needs at least one value",
            ));
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && min >= max
        {
            return Err(GlyphError::InvalidRange { axis, min, max });
        }
        Ok(())
    }

    /// Which bounds were supplied, with the spread coerced to its magnitude.
    ///
    /// When both bounds are given the spread is ignored.
    pub fn bounds(&self) -> BoundsSpec {
        let spread = self.spread.map(f64::abs);
        match (self.min, self.max) {
            (None, None) => BoundsSpec::Derived { spread },
            (Some(min), None) => BoundsSpec::FromMin { min, spread },
            (None, Some(max)) => BoundsSpec::FromMax { max, spread },
            (Some(min), Some(max)) => BoundsSpec::Explicit { min, max },
        }
    }
}

/// The combination of bounds a caller supplied for one scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundsSpec {
    /// Neither bound given; both come from the data, the spread if present.
    Derived {
        /// Non-negative spread
        spread: Option<f64>,
    },
    /// Only the minimum given.
    FromMin {
        /// Supplied minimum
        min: f64,
        /// Non-negative spread
        spread: Option<f64>,
    },
    /// Only the maximum given.
    FromMax {
        /// Supplied maximum
        max: f64,
        /// Non-negative spread
        spread: Option<f64>,
    },
    /// Both bounds given.
    Explicit {
        /// Supplied minimum
        min: f64,
        /// Supplied maximum
        max: f64,
    },
}

/// Concrete lower and upper bound of a scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBounds {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl ResolvedBounds {
    /// Creates bounds from a pair.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when some observed value falls outside the bounds.
    pub fn excludes(&self, stats: &DataStats) -> bool {
        self.min > stats.min || self.max < stats.max
    }
}

fn explicit(axis: ScaleAxis, min: f64, max: f64) -> GlyphResult<ResolvedBounds> {
    if min >= max {
        return Err(GlyphError::InvalidRange { axis, min, max });
    }
    Ok(ResolvedBounds::new(min, max))
}

/// Bounds of a colour scale.
///
/// Defaults come straight from the data range; a lone spread is centred on the
/// midpoint of the data.
pub fn resolve_colour_bounds(spec: BoundsSpec, stats: &DataStats) -> GlyphResult<ResolvedBounds> {
    let bounds = match spec {
        BoundsSpec::Derived { spread: None } => ResolvedBounds::new(stats.min, stats.max),
        BoundsSpec::Derived {
            spread: Some(spread),
        } => {
            let mid = (stats.min + stats.max) / 2.0;
            ResolvedBounds::new(mid - spread / 2.0, mid + spread / 2.0)
        }
        BoundsSpec::FromMin { min, spread: None } => ResolvedBounds::new(min, stats.max),
        BoundsSpec::FromMin {
            min,
            spread: Some(spread),
        } => ResolvedBounds::new(min, min + spread),
        BoundsSpec::FromMax { max, spread: None } => ResolvedBounds::new(stats.min, max),
        BoundsSpec::FromMax {
            max,
            spread: Some(spread),
        } => ResolvedBounds::new(max - spread, max),
        BoundsSpec::Explicit { min, max } => explicit(ScaleAxis::Colour, min, max)?,
    };
    Ok(bounds)
}

/// Bounds of a divergent shape scale, symmetric about zero unless both bounds
/// are supplied.
pub fn resolve_divergent_bounds(
    spec: BoundsSpec,
    stats: &DataStats,
) -> GlyphResult<ResolvedBounds> {
    let bounds = match spec {
        BoundsSpec::Derived { spread: None } => {
            let max = stats.max_abs().max(1.0);
            ResolvedBounds::new(-max, max)
        }
        BoundsSpec::Derived {
            spread: Some(spread),
        } => ResolvedBounds::new(-spread / 2.0, spread / 2.0),
        BoundsSpec::FromMin { min, spread: None } => ResolvedBounds::new(min, -min),
        BoundsSpec::FromMin {
            min,
            spread: Some(spread),
        } => ResolvedBounds::new(min, min + spread),
        BoundsSpec::FromMax { max, spread: None } => ResolvedBounds::new(-max, max),
        BoundsSpec::FromMax {
            max,
            spread: Some(spread),
        } => ResolvedBounds::new(max - spread, max),
        BoundsSpec::Explicit { min, max } => explicit(ScaleAxis::Shape, min, max)?,
    };
    Ok(bounds)
}

/// Bounds of a shape scale over data that is entirely non-positive.
///
/// The upper bound defaults to zero.
pub fn resolve_negative_bounds(
    spec: BoundsSpec,
    stats: &DataStats,
) -> GlyphResult<ResolvedBounds> {
    let bounds = match spec {
        BoundsSpec::Derived { spread: None } => {
            ResolvedBounds::new(-stats.max_abs().max(1.0), stats.max.max(0.0))
        }
        BoundsSpec::Derived {
            spread: Some(spread),
        } => ResolvedBounds::new(-spread, 0.0),
        BoundsSpec::FromMin { min, spread: None } => ResolvedBounds::new(min, 0.0),
        BoundsSpec::FromMin {
            min,
            spread: Some(spread),
        } => ResolvedBounds::new(min, min + spread),
        BoundsSpec::FromMax { max, spread: None } => ResolvedBounds::new(stats.min, max),
        BoundsSpec::FromMax {
            max,
            spread: Some(spread),
        } => ResolvedBounds::new(larger_magnitude(stats.max_by_abs, max - spread), max),
        BoundsSpec::Explicit { min, max } => explicit(ScaleAxis::Shape, min, max)?,
    };
    Ok(bounds)
}

/// Bounds of a shape scale over mixed or non-negative data.
///
/// The lower bound defaults to zero (or the data minimum, if lower) and the
/// upper bound to the largest magnitude, but never less than 1.
pub fn resolve_normal_bounds(spec: BoundsSpec, stats: &DataStats) -> GlyphResult<ResolvedBounds> {
    let bounds = match spec {
        BoundsSpec::Derived { spread: None } => {
            ResolvedBounds::new(stats.min.min(0.0), stats.max_abs().max(1.0))
        }
        BoundsSpec::Derived {
            spread: Some(spread),
        } => ResolvedBounds::new(0.0, spread),
        BoundsSpec::FromMin { min, spread: None } => {
            ResolvedBounds::new(min, stats.max_abs().max(1.0))
        }
        BoundsSpec::FromMin {
            min,
            spread: Some(spread),
        } => ResolvedBounds::new(min, min + spread),
        BoundsSpec::FromMax { max, spread: None } => ResolvedBounds::new(stats.min.min(0.0), max),
        BoundsSpec::FromMax {
            max,
            spread: Some(spread),
        } => ResolvedBounds::new(max - spread, max),
        BoundsSpec::Explicit { min, max } => explicit(ScaleAxis::Shape, min, max)?,
    };
    Ok(bounds)
}
