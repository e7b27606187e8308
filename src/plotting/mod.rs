//! Glyph scatter plots.
//!
//! Each data point is drawn as a composite glyph: a black ring, a white
//! waveform outline whose ripple frequency encodes the shape metric, and an
//! inner disc filled by the colour metric.
//!
//! # Quick Start
//!
//! ```rust
//! use entropy_glyphs::data::GlyphData;
//! use entropy_glyphs::plotting::{GlyphPlot, GlyphPlotConfig, RecordingCanvas};
//! use entropy_glyphs::scales::ScaleSpec;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let data = GlyphData::from_columns(
//!     &[0.0, 1.0, 2.0, 3.0],
//!     &[1.0, 0.0, 1.0, 0.0],
//!     &[4.0, 8.0, 12.0, 16.0],
//!     &[-1.5, -0.2, 0.4, 2.0],
//!     &[20.0, 25.0, 30.0, 35.0],
//! )?;
//!
//! let config = GlyphPlotConfig::new()
//!     .with_colormap("RdBu_r")
//!     .with_divergent_shapes("star", "saw")
//!     .with_shape_scale(ScaleSpec::new().with_count(3));
//!
//! let plot = GlyphPlot::build(&data, &config)?;
//! let mut canvas = RecordingCanvas::new();
//! plot.render(&mut canvas)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **GlyphPlotConfig**: plot-wide settings with documented defaults
//! - **GlyphPlot**: resolves settings, builds scales, classifies points
//! - **GlyphCanvas trait**: the rendering seam; backends implement it
//! - **RecordingCanvas**: in-memory canvas for tests and post-processing

pub mod composer;
pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub use self::composer::*;
pub use self::config::*;
pub use self::core::*;
