//! Fixed scientific temperature colour table.
//!
//! A discrete step function: band `i` covers `(LIMITS[i-1], LIMITS[i]]`, the
//! first band also takes everything below `LIMITS[0]`, and values above the
//! last limit cannot be represented.

use super::Rgba;
use crate::{GlyphError, GlyphResult};

/// Upper cutoff of each band, ascending (°C).
pub const SCIENTIFIC_LIMITS: [f64; 27] = [
    -12.0, -10.0, -8.0, -6.0, -4.0, -2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0,
    20.0, 22.0, 24.0, 26.0, 28.0, 30.0, 32.0, 35.0, 40.0, 45.0, 50.0,
];

/// Colour of each band, parallel to [`SCIENTIFIC_LIMITS`].
pub const SCIENTIFIC_COLOURS: [[u8; 3]; 27] = [
    [0x2a, 0x0a, 0x5e],
    [0x3b, 0x1f, 0x8a],
    [0x3a, 0x3f, 0xb0],
    [0x2f, 0x5f, 0xcf],
    [0x2f, 0x80, 0xe0],
    [0x3f, 0xa0, 0xe8],
    [0x62, 0xbd, 0xea],
    [0x8e, 0xd3, 0xe8],
    [0xb7, 0xe4, 0xd8],
    [0xd3, 0xee, 0xc0],
    [0xe6, 0xf4, 0xa6],
    [0xf4, 0xf0, 0x8c],
    [0xfd, 0xe4, 0x76],
    [0xfd, 0xd1, 0x63],
    [0xfd, 0xbb, 0x52],
    [0xfc, 0xa3, 0x45],
    [0xf8, 0x8a, 0x3b],
    [0xf2, 0x6f, 0x32],
    [0xe9, 0x55, 0x2b],
    [0xdc, 0x3d, 0x26],
    [0xcb, 0x27, 0x22],
    [0xb5, 0x17, 0x1f],
    [0x9c, 0x0d, 0x1d],
    [0x82, 0x06, 0x1b],
    [0x68, 0x03, 0x18],
    [0x4e, 0x01, 0x14],
    [0x35, 0x00, 0x0f],
];

/// Index of the band holding `value`: the first band whose cutoff is `>= value`.
pub fn band_index(value: f64) -> Option<usize> {
    let index = SCIENTIFIC_LIMITS.partition_point(|&limit| limit < value);
    (index < SCIENTIFIC_LIMITS.len()).then_some(index)
}

/// Colour of the band holding `value`.
///
/// # Errors
/// Returns [`GlyphError::OutOfScientificRange`] when `value` exceeds the last cutoff.
pub fn scientific_colour(value: f64) -> GlyphResult<Rgba> {
    let limit = SCIENTIFIC_LIMITS[SCIENTIFIC_LIMITS.len() - 1];
    let index = band_index(value).ok_or(GlyphError::OutOfScientificRange { value, limit })?;
    let [r, g, b] = SCIENTIFIC_COLOURS[index];
    Ok(Rgba::from_rgb8(r, g, b))
}
