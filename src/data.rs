//! Validated input columns for a glyph plot.

use ndarray::Array1;

use crate::{GlyphError, GlyphResult};

/// One observed data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Value encoded by the inner fill colour
    pub colour: f64,
    /// Value encoded by the waveform outline
    pub shape: f64,
    /// Glyph diameter in points
    pub size: f64,
}

/// Parallel columns of glyph data.
///
/// Construction checks that all five columns have the same, non-zero length
/// and that every entry is finite; afterwards the data is immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphData {
    x: Array1<f64>,
    y: Array1<f64>,
    colour: Array1<f64>,
    shape: Array1<f64>,
    size: Array1<f64>,
}

impl GlyphData {
    /// Builds glyph data from five parallel columns.
    ///
    /// # Errors
    /// - the columns differ in length
    /// - the columns are empty
    /// - any entry is NaN or infinite
    pub fn from_columns(
        x: &[f64],
        y: &[f64],
        colour: &[f64],
        shape: &[f64],
        size: &[f64],
    ) -> GlyphResult<Self> {
        let n = x.len();
        if [y.len(), colour.len(), shape.len(), size.len()]
            .iter()
            .any(|&len| len != n)
        {
            return Err(GlyphError::invalid_input(
                "x_values, y_values, colour_values, shape_values and size_values must all be of the same length",
            ));
        }
        if n == 0 {
            return Err(GlyphError::invalid_input("Empty input lists"));
        }

        for (name, column) in [
            ("x", x),
            ("y", y),
            ("colour", colour),
            ("shape", shape),
            ("size", size),
        ] {
            if let Some(bad) = column.iter().find(|v| !v.is_finite()) {
                return Err(GlyphError::invalid_input(format!(
                    "{name} values must be finite numbers, found {bad}"
                )));
            }
        }

        Ok(Self {
            x: Array1::from(x.to_vec()),
            y: Array1::from(y.to_vec()),
            colour: Array1::from(colour.to_vec()),
            shape: Array1::from(shape.to_vec()),
            size: Array1::from(size.to_vec()),
        })
    }

    /// Number of data points. Never zero.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when there are no data points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Horizontal positions.
    pub fn x_values(&self) -> &Array1<f64> {
        &self.x
    }

    /// Vertical positions.
    pub fn y_values(&self) -> &Array1<f64> {
        &self.y
    }

    /// Values encoded by colour.
    pub fn colour_values(&self) -> &Array1<f64> {
        &self.colour
    }

    /// Values encoded by shape.
    pub fn shape_values(&self) -> &Array1<f64> {
        &self.shape
    }

    /// Glyph diameters.
    pub fn size_values(&self) -> &Array1<f64> {
        &self.size
    }

    /// Returns the sample at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<Sample> {
        (index < self.len()).then(|| Sample {
            x: self.x[index],
            y: self.y[index],
            colour: self.colour[index],
            shape: self.shape[index],
            size: self.size[index],
        })
    }

    /// Iterates over the samples in input order.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        (0..self.len()).map(move |i| Sample {
            x: self.x[i],
            y: self.y[i],
            colour: self.colour[i],
            shape: self.shape[i],
            size: self.size[i],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_valid() {
        let data = GlyphData::from_columns(
            &[0.0, 1.0],
            &[2.0, 3.0],
            &[10.0, 20.0],
            &[-1.0, 1.0],
            &[30.0, 40.0],
        )
        .unwrap();

        assert_eq!(data.len(), 2);
        assert!(!data.is_empty());
        let second = data.get(1).unwrap();
        assert_eq!(second.colour, 20.0);
        assert_eq!(second.size, 40.0);
        assert!(data.get(2).is_none());
        assert_eq!(data.samples().count(), 2);
    }

    #[test]
    fn test_from_columns_length_mismatch() {
        let err = GlyphData::from_columns(&[0.0, 1.0], &[2.0], &[1.0, 1.0], &[1.0, 1.0], &[1.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, GlyphError::InvalidInput(_)));
        assert!(err.to_string().contains("same length"));
    }

    #[test]
    fn test_from_columns_empty() {
        let err = GlyphData::from_columns(&[], &[], &[], &[], &[]).unwrap_err();
        assert!(err.to_string().contains("Empty"));
    }

    #[test]
    fn test_from_columns_non_finite() {
        let err = GlyphData::from_columns(&[0.0], &[0.0], &[f64::NAN], &[1.0], &[1.0]).unwrap_err();
        assert!(err.to_string().contains("colour"));

        let err =
            GlyphData::from_columns(&[0.0], &[0.0], &[1.0], &[1.0], &[f64::INFINITY]).unwrap_err();
        assert!(err.to_string().contains("size"));
    }
}
