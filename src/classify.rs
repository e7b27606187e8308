//! Mapping of individual observed values onto built scales.
//!
//! A [`GlyphClassifier`] ties together everything needed to style one point:
//! which waveform family to draw, at which frequency, and with which fill.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colour::{ColourMapping, Rgba};
use crate::scales::FrequencyScale;
use crate::utils::generation::ShapeFamily;
use crate::{GlyphError, GlyphResult};

/// How a shape value is matched to a breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalType {
    /// The breakpoint nearest to the value.
    #[default]
    Closest,
    /// The breakpoint bounding the value from the zero side.
    Limit,
}

impl IntervalType {
    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            IntervalType::Closest => "closest",
            IntervalType::Limit => "limit",
        }
    }
}

impl fmt::Display for IntervalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntervalType {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "closest" => Ok(IntervalType::Closest),
            "limit" => Ok(IntervalType::Limit),
            _ => Err(GlyphError::invalid_parameter(
                "interval_type",
                format!("'{s}' is not a valid interval type, select 'closest' or 'limit'"),
            )),
        }
    }
}

fn closest_index(value: f64, breakpoints: &[f64]) -> usize {
    let last = breakpoints.len() - 1;
    let mut i = 0;
    while i < last && value > breakpoints[i] {
        i += 1;
    }
    if i == 0 {
        return 0;
    }
    // ties go to the upper breakpoint
    if (value - breakpoints[i - 1]).abs() < (breakpoints[i] - value).abs() {
        i - 1
    } else {
        i
    }
}

fn limit_index(value: f64, breakpoints: &[f64]) -> usize {
    let len = breakpoints.len();
    let mut i = 0;
    if value <= 0.0 {
        while i < len && value > breakpoints[i] {
            i += 1;
        }
        i.min(len - 1)
    } else {
        while i < len && value >= breakpoints[i] {
            i += 1;
        }
        i.saturating_sub(1)
    }
}

/// Frequency of the shape breakpoint that `value` falls to.
///
/// `breakpoints` and `frequencies` are parallel. A one-entry scale always
/// yields its only frequency.
///
/// # Errors
/// Returns [`GlyphError::InvalidInput`] if the scale is empty or the two
/// sequences differ in length.
pub fn classify_frequency(
    value: f64,
    breakpoints: &[f64],
    frequencies: &FrequencyScale,
    interval: IntervalType,
) -> GlyphResult<u32> {
    if breakpoints.is_empty() {
        return Err(GlyphError::invalid_input("shape scale is empty"));
    }
    if breakpoints.len() != frequencies.len() {
        return Err(GlyphError::invalid_input(format!(
            "shape scale ({}) and frequency scale ({}) must be of the same length",
            breakpoints.len(),
            frequencies.len()
        )));
    }

    let index = if breakpoints.len() == 1 {
        0
    } else {
        match interval {
            IntervalType::Closest => closest_index(value, breakpoints),
            IntervalType::Limit => limit_index(value, breakpoints),
        }
    };

    Ok(frequencies.as_slice()[index])
}

/// The waveform families in use for a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSelection {
    /// One family for every point.
    Single(ShapeFamily),
    /// Separate families above and at-or-below zero.
    Divergent {
        /// Family for values above zero
        positive: ShapeFamily,
        /// Family for values at or below zero
        negative: ShapeFamily,
    },
}

impl ShapeSelection {
    /// Family for a shape value.
    pub fn classify(&self, value: f64) -> ShapeFamily {
        match *self {
            ShapeSelection::Single(family) => family,
            ShapeSelection::Divergent { positive, .. } if value > 0.0 => positive,
            ShapeSelection::Divergent { negative, .. } => negative,
        }
    }
}

/// Style chosen for one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Waveform family
    pub family: ShapeFamily,
    /// Waveform frequency
    pub frequency: u32,
    /// Inner fill
    pub colour: Rgba,
}

/// Classifies values against the scales of one plot.
#[derive(Debug, Clone, Copy)]
pub struct GlyphClassifier<'a> {
    shapes: ShapeSelection,
    shape_scale: &'a [f64],
    frequencies: &'a FrequencyScale,
    interval: IntervalType,
    colours: &'a ColourMapping,
}

impl<'a> GlyphClassifier<'a> {
    /// Creates a classifier.
    ///
    /// # Errors
    /// Fails if the shape and frequency scales are empty or not parallel.
    pub fn new(
        shapes: ShapeSelection,
        shape_scale: &'a [f64],
        frequencies: &'a FrequencyScale,
        interval: IntervalType,
        colours: &'a ColourMapping,
    ) -> GlyphResult<Self> {
        if shape_scale.is_empty() || shape_scale.len() != frequencies.len() {
            return Err(GlyphError::invalid_input(format!(
                "shape scale ({}) and frequency scale ({}) must be non-empty and of the same length",
                shape_scale.len(),
                frequencies.len()
            )));
        }
        Ok(Self {
            shapes,
            shape_scale,
            frequencies,
            interval,
            colours,
        })
    }

    /// Waveform family for a shape value.
    pub fn classify_shape(&self, value: f64) -> ShapeFamily {
        self.shapes.classify(value)
    }

    /// Waveform frequency for a shape value.
    pub fn classify_frequency(&self, value: f64) -> GlyphResult<u32> {
        classify_frequency(value, self.shape_scale, self.frequencies, self.interval)
    }

    /// Fill colour for a colour value.
    pub fn classify_colour(&self, value: f64) -> GlyphResult<Rgba> {
        self.colours.colour_for(value)
    }

    /// Full style for a point with the given colour and shape values.
    pub fn classify(&self, colour_value: f64, shape_value: f64) -> GlyphResult<Classification> {
        Ok(Classification {
            family: self.classify_shape(shape_value),
            frequency: self.classify_frequency(shape_value)?,
            colour: self.classify_colour(colour_value)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Palette;
    use crate::scales::{ScaleSpec, colour_scale, frequency_scale};

    fn scale_of(breakpoints: &[f64]) -> FrequencyScale {
        frequency_scale(breakpoints, false).unwrap()
    }

    #[test]
    fn test_interval_type_parsing() {
        assert_eq!("closest".parse::<IntervalType>().unwrap(), IntervalType::Closest);
        assert_eq!("Limit".parse::<IntervalType>().unwrap(), IntervalType::Limit);
        let err = "nearest".parse::<IntervalType>().unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("interval_type"));
    }

    #[test]
    fn test_closest_picks_nearest_breakpoint() {
        let shape = [0.0, 1.0, 2.0, 3.0];
        let freq = scale_of(&shape);
        assert_eq!(freq.as_slice(), &[0, 3, 6, 12]);

        let at = |v| classify_frequency(v, &shape, &freq, IntervalType::Closest).unwrap();
        assert_eq!(at(1.6), 6);
        assert_eq!(at(1.4), 3);
        assert_eq!(at(1.5), 6);
        assert_eq!(at(-5.0), 0);
        assert_eq!(at(0.0), 0);
        assert_eq!(at(3.0), 12);
        assert_eq!(at(99.0), 12);
    }

    #[test]
    fn test_limit_positive_values_step_back() {
        let shape = [0.0, 1.0, 2.0, 3.0];
        let freq = scale_of(&shape);
        let at = |v| classify_frequency(v, &shape, &freq, IntervalType::Limit).unwrap();
        assert_eq!(at(0.5), 0);
        assert_eq!(at(1.0), 3);
        assert_eq!(at(1.9), 3);
        assert_eq!(at(2.0), 6);
        assert_eq!(at(7.0), 12);
    }

    #[test]
    fn test_limit_non_positive_values_round_towards_zero() {
        let shape = [-4.0, -2.0, 0.0, 2.0, 4.0];
        let freq = frequency_scale(&shape, true).unwrap();
        assert_eq!(freq.as_slice(), &[6, 3, 0, 3, 6]);

        let at = |v| classify_frequency(v, &shape, &freq, IntervalType::Limit).unwrap();
        assert_eq!(at(-4.0), 6);
        assert_eq!(at(-3.0), 3);
        assert_eq!(at(-2.0), 3);
        assert_eq!(at(-0.5), 0);
        assert_eq!(at(0.0), 0);
        assert_eq!(at(-10.0), 6);
    }

    #[test]
    fn test_limit_scan_is_bounded() {
        // every breakpoint below the value: clamp rather than overrun
        let shape = [-6.0, -4.0, -2.0];
        let freq = scale_of(&shape);
        assert_eq!(
            classify_frequency(-1.0, &shape, &freq, IntervalType::Limit).unwrap(),
            0
        );
        // positive value below every breakpoint
        let shape = [1.0, 2.0];
        let freq = scale_of(&shape);
        assert_eq!(
            classify_frequency(0.5, &shape, &freq, IntervalType::Limit).unwrap(),
            0
        );
    }

    #[test]
    fn test_single_entry_scale() {
        let shape = [2.5];
        let freq = scale_of(&shape);
        for interval in [IntervalType::Closest, IntervalType::Limit] {
            assert_eq!(classify_frequency(-9.0, &shape, &freq, interval).unwrap(), 0);
        }
    }

    #[test]
    fn test_mismatched_scales_rejected() {
        let freq = scale_of(&[0.0, 1.0]);
        assert!(classify_frequency(0.5, &[0.0, 1.0, 2.0], &freq, IntervalType::Closest).is_err());
        assert!(classify_frequency(0.5, &[], &freq, IntervalType::Closest).is_err());
    }

    #[test]
    fn test_shape_selection() {
        let single = ShapeSelection::Single(ShapeFamily::Star);
        assert_eq!(single.classify(-1.0), ShapeFamily::Star);

        let pair = ShapeSelection::Divergent {
            positive: ShapeFamily::Sine,
            negative: ShapeFamily::Square,
        };
        assert_eq!(pair.classify(0.1), ShapeFamily::Sine);
        assert_eq!(pair.classify(0.0), ShapeFamily::Square);
        assert_eq!(pair.classify(-0.1), ShapeFamily::Square);
    }

    #[test]
    fn test_classifier_combines_axes() {
        let shape = [0.0, 1.0, 2.0];
        let freq = scale_of(&shape);
        let colours = colour_scale(&[0.0, 10.0], &ScaleSpec::new(), 1).unwrap();
        let mapping = ColourMapping::new(Palette::default(), &colours);
        let classifier = GlyphClassifier::new(
            ShapeSelection::Single(ShapeFamily::Saw),
            &shape,
            &freq,
            IntervalType::Closest,
            &mapping,
        )
        .unwrap();

        let c = classifier.classify(10.0, 1.8).unwrap();
        assert_eq!(c.family, ShapeFamily::Saw);
        assert_eq!(c.frequency, 6);
        assert_eq!(c.colour, mapping.colour_for(10.0).unwrap());

        let other = FrequencyScale::default();
        assert!(
            GlyphClassifier::new(
                ShapeSelection::Single(ShapeFamily::Saw),
                &shape,
                &other,
                IntervalType::Closest,
                &mapping,
            )
            .is_err()
        );
    }
}
