//! Glyph outline generation.
//!
//! Every glyph outline is a closed polar curve sampled at [`OUTLINE_SAMPLES`]
//! evenly spaced angles over one full turn. The radius at each angle comes from
//! a periodic waveform whose frequency sets the number of ripples around the
//! glyph; frequency 0 is the plain circle used for the baseline breakpoint.
//!
//! The periodic primitives ([`sawtooth`], [`square`]) are generic over the
//! float type and follow the usual signal-processing conventions: period 2π,
//! output in `[-1, 1]`.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView1};
use num_traits::{Float, FloatConst};

use crate::GlyphError;

/// Number of angular samples in every glyph outline.
pub const OUTLINE_SAMPLES: usize = 720;

/// Radius of a zero-frequency (circular) outline.
pub const SHAPE_RADIUS: f64 = 0.8;

/// Family of waveform used to modulate a glyph outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
    /// Smooth sinusoidal ripples.
    Sine,
    /// Rising ramps.
    Saw,
    /// Falling ramps.
    ReverseSaw,
    /// Alternating plateaus.
    Square,
    /// Symmetric ramps.
    Triangular,
    /// Squared symmetric ramps, giving scalloped edges.
    Concave,
    /// Straight-edged star with `frequency` points.
    Star,
}

impl ShapeFamily {
    /// Every supported family, in documentation order.
    pub const ALL: [ShapeFamily; 7] = [
        ShapeFamily::Sine,
        ShapeFamily::Saw,
        ShapeFamily::ReverseSaw,
        ShapeFamily::Square,
        ShapeFamily::Triangular,
        ShapeFamily::Concave,
        ShapeFamily::Star,
    ];

    /// The configuration name of this family.
    pub const fn name(self) -> &'static str {
        match self {
            ShapeFamily::Sine => "sine",
            ShapeFamily::Saw => "saw",
            ShapeFamily::ReverseSaw => "reverse_saw",
            ShapeFamily::Square => "square",
            ShapeFamily::Triangular => "triangular",
            ShapeFamily::Concave => "concave",
            ShapeFamily::Star => "star",
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeFamily {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeFamily::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| {
                GlyphError::invalid_parameter("shape", format!("'{s}' is not a supported shape"))
            })
    }
}

/// Sawtooth wave with period 2π.
///
/// `width` is the fraction of the period spent rising: 1 gives a rising ramp,
/// 0 a falling ramp and 0.5 a symmetric triangle. The output runs from -1 to 1.
pub fn sawtooth<F: Float + FloatConst>(phase: F, width: F) -> F {
    let two = F::one() + F::one();
    let tau = two * F::PI();
    let t = phase % tau;
    let t = if t < F::zero() { t + tau } else { t };

    if t < width * tau {
        t / (F::PI() * width) - F::one()
    } else {
        (F::PI() * (width + F::one()) - t) / (F::PI() * (F::one() - width))
    }
}

/// Square wave with period 2π and a 50% duty cycle: 1 for the first half of
/// each period, -1 for the second.
pub fn square<F: Float + FloatConst>(phase: F) -> F {
    let tau = (F::one() + F::one()) * F::PI();
    let t = phase % tau;
    let t = if t < F::zero() { t + tau } else { t };

    if t < F::PI() { F::one() } else { -F::one() }
}

/// The angular sampling grid shared by every outline: `2π/720 · i` for `i` in `0..720`.
pub fn sample_angles() -> Array1<f64> {
    let step = 2.0 * std::f64::consts::PI / OUTLINE_SAMPLES as f64;
    Array1::from_shape_fn(OUTLINE_SAMPLES, |i| step * i as f64)
}

/// Radius at every sample angle for `family` modulated at `frequency`.
pub fn glyph_radii(family: ShapeFamily, frequency: u32) -> Array1<f64> {
    let theta = sample_angles();
    let freq = f64::from(frequency);
    let circle = || Array1::from_elem(OUTLINE_SAMPLES, SHAPE_RADIUS);

    // frequency 0 is the baseline breakpoint: a plain circle for every family
    match family {
        _ if frequency == 0 => circle(),
        ShapeFamily::Sine => theta.mapv(|t| SHAPE_RADIUS + 0.18 * (freq * t).sin()),
        ShapeFamily::Saw => theta.mapv(|t| 0.85 + 0.15 * sawtooth(freq * t, 1.0)),
        ShapeFamily::ReverseSaw => theta.mapv(|t| 0.85 + 0.15 * sawtooth(freq * t, 0.0)),
        ShapeFamily::Square => theta.mapv(|t| 0.79 + 0.18 * square(freq * t)),
        ShapeFamily::Triangular => theta.mapv(|t| SHAPE_RADIUS + 0.18 * sawtooth(freq * t, 0.5)),
        ShapeFamily::Concave => theta.mapv(|t| 0.6 + 0.4 * sawtooth(freq / 2.0 * t, 0.5).powi(2)),
        ShapeFamily::Star => star_radii(theta.view(), frequency),
    }
}

/// Radius, along the ray at angle `theta`, of the straight line through
/// `(x1, y1)` and `(x2, y2)`.
fn line_radius(x1: f64, y1: f64, x2: f64, y2: f64, theta: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * y1 - dy * x1) / (dx * theta.sin() - dy * theta.cos())
}

/// Star outline: `2·frequency` vertices alternating between radius 0.6 and 1.0,
/// joined by straight edges.
fn star_radii(theta: ArrayView1<'_, f64>, frequency: u32) -> Array1<f64> {
    let n = 2 * frequency as usize;
    let freq = f64::from(frequency);
    let step = 2.0 * std::f64::consts::PI / (2.0 * freq);

    // (angle, x, y) of each vertex
    let vertices: Vec<(f64, f64, f64)> = (0..n)
        .map(|k| {
            let angle = step * k as f64;
            let r = SHAPE_RADIUS + 0.2 * sawtooth(freq * angle, 0.5);
            (angle, r * angle.cos(), r * angle.sin())
        })
        .collect();

    let mut edge = 0;
    theta
        .iter()
        .map(|&t| {
            while edge + 1 < n && t > vertices[edge + 1].0 {
                edge += 1;
            }
            let (_, x1, y1) = vertices[edge];
            let (_, x2, y2) = vertices[(edge + 1) % n];
            line_radius(x1, y1, x2, y2, t)
        })
        .collect()
}

/// A closed glyph outline: [`OUTLINE_SAMPLES`] Cartesian points in angular order.
///
/// Point `i` is `(r·sin θ, r·cos θ)` for the `i`-th sample angle, so the outline
/// starts at the top of the glyph and runs clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformOutline {
    family: ShapeFamily,
    frequency: u32,
    points: Array2<f64>,
}

impl WaveformOutline {
    /// Family the outline was generated from.
    pub const fn family(&self) -> ShapeFamily {
        self.family
    }

    /// Frequency the outline was generated with.
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// The outline as an `(OUTLINE_SAMPLES, 2)` matrix of `[x, y]` rows.
    pub const fn as_array(&self) -> &Array2<f64> {
        &self.points
    }

    /// Number of points. Always [`OUTLINE_SAMPLES`].
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// True when the outline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Iterates over the `(x, y)` points in angular order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.points.rows().into_iter().map(|row| (row[0], row[1]))
    }

    /// Largest absolute coordinate over the outline. Used to scale the outline
    /// marker so that its extent matches the glyph diameter.
    pub fn max_abs_coordinate(&self) -> f64 {
        self.points.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

/// Generates the outline for `family` modulated at `frequency`.
///
/// Pure and deterministic: the same arguments always give the same points.
pub fn glyph_outline(family: ShapeFamily, frequency: u32) -> WaveformOutline {
    let theta = sample_angles();
    let radii = glyph_radii(family, frequency);
    let points = Array2::from_shape_fn((OUTLINE_SAMPLES, 2), |(i, j)| {
        if j == 0 {
            radii[i] * theta[i].sin()
        } else {
            radii[i] * theta[i].cos()
        }
    });

    WaveformOutline {
        family,
        frequency,
        points,
    }
}
