// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # entropy_glyphs
//!
//! Scales and glyph geometry for scatter plots that encode two variables per
//! point: one as a fill colour, one as the ripple frequency of a polar
//! waveform outline.
//!
//! ## Overview
//!
//! Raw numeric columns go through a fixed pipeline:
//!
//! 1. a colour scale and a shape scale are computed from the data and any
//!    user-supplied bounds, spread and count ([`scales`])
//! 2. the shape scale gets a parallel frequency scale growing as `3·2^i`
//! 3. each point is classified onto both scales ([`classify`])
//! 4. a 720-point waveform outline is generated per distinct
//!    `(family, frequency)` pair ([`utils::generation`])
//! 5. glyphs, legend and layout are handed to a [`plotting::GlyphCanvas`]
//!
//! Drawing itself is left to the canvas implementation.
//!
//! ## Features
//!
//! - `parallel-processing`: generate waveform outlines in parallel with `rayon`
//! - `serialization`: load a [`plotting::GlyphPlotConfig`] from JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use entropy_glyphs::{GlyphData, GlyphPlot, GlyphPlotConfig, RecordingCanvas};
//!
//! let data = GlyphData::from_columns(
//!     &[0.0, 1.0, 2.0],
//!     &[0.0, 0.5, 0.0],
//!     &[11.2, 14.8, 19.1],
//!     &[-0.6, 0.1, 0.9],
//!     &[25.0, 25.0, 25.0],
//! )?;
//! let plot = GlyphPlot::build(&data, &GlyphPlotConfig::default())?;
//! assert!(plot.is_divergent());
//!
//! let mut canvas = RecordingCanvas::new();
//! plot.render(&mut canvas).unwrap();
//! # Ok::<(), entropy_glyphs::GlyphError>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`GlyphResult`]. Problems that can be fixed
//! by substituting a default (unknown shape or colormap names, unusable size
//! hints, too many shapes) do not fail; they are logged through `tracing` and
//! returned as [`Diagnostic`]s with the plot.

mod error;

pub mod classify;
pub mod colour;
pub mod data;
pub mod plotting;
pub mod scales;
pub mod utils;

pub use crate::classify::{GlyphClassifier, IntervalType, ShapeSelection, classify_frequency};
pub use crate::colour::{ColourMapping, Colormap, Palette, Rgba};
pub use crate::data::{GlyphData, Sample};
pub use crate::error::{Diagnostic, GlyphError, GlyphResult, ScaleAxis};
pub use crate::plotting::{
    FigureLayout, Glyph, GlyphCanvas, GlyphPlot, GlyphPlotConfig, Legend, RecordingCanvas,
};
pub use crate::scales::{
    FrequencyScale, Scale, ScaleSpec, ShapeScale, colour_scale, frequency_scale, shape_scale,
};
pub use crate::utils::generation::{ShapeFamily, WaveformOutline, glyph_outline};
