//! Tests for glyph plot composition and rendering.

use crate::data::GlyphData;


/// Helper to build data whose x positions are the point indices.
pub(crate) fn create_test_data(colour: &[f64], shape: &[f64]) -> GlyphData {
    let n = colour.len();
    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| (v * 0.5).sin()).collect();
    let size = vec![20.0; n];
    GlyphData::from_columns(&x, &y, colour, shape, &size).unwrap()
}
