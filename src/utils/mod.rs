//! Numeric helpers and waveform generation shared by the scale builders and
//! the plot composer.
//!
//! # Modules
//!
//! - [`generation`] - Polar waveform outline generation
//! - [`numeric`] - Rounding, data statistics and sign classification

pub mod generation;
pub mod numeric;

pub use generation::{ShapeFamily, WaveformOutline, glyph_outline};
pub use numeric::{DataStats, is_divergent, is_negative, round_to};
