//! Error types, diagnostics and result utilities for glyph plot construction.

use std::fmt;

use thiserror::Error;

/// Convenience type alias for results that may contain GlyphError
pub type GlyphResult<T> = Result<T, GlyphError>;

/// The two data axes that are encoded by a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleAxis {
    /// The metric encoded by the inner fill colour.
    Colour,
    /// The metric encoded by the waveform outline.
    Shape,
}

impl fmt::Display for ScaleAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleAxis::Colour => f.write_str("colour"),
            ScaleAxis::Shape => f.write_str("shape"),
        }
    }
}

/// Error types that can occur while building scales, classifying values or
/// composing a glyph plot.
///
/// Every variant is fatal: a plot is either fully built or not built at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlyphError {
    /// Error that occurs when the input columns are malformed.
    ///
    /// This happens for mismatched column lengths, empty input and non-finite entries.
    #[error("Invalid input error: {0}")]
    InvalidInput(String),

    /// Error that occurs when explicitly supplied scale bounds are contradictory.
    #[error("Invalid range error: minimum {axis} scale value ({min}) must be lower than maximum {axis} scale value ({max})")]
    InvalidRange {
        /// Axis whose bounds were rejected
        axis: ScaleAxis,
        /// Supplied minimum
        min: f64,
        /// Supplied maximum
        max: f64,
    },

    /// Error that occurs when a configuration parameter cannot be used.
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: String,
        /// Why it was rejected
        reason: String,
    },

    /// Error that occurs when a value lies beyond the fixed scientific colour table.
    #[error("Value {value} is outside of the limits of the scientific colour scale (upper limit {limit}). Select another colormap for this data.")]
    OutOfScientificRange {
        /// Offending value
        value: f64,
        /// Last cutoff of the table
        limit: f64,
    },
}

impl GlyphError {
    /// Create an invalid input error
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput(details.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error stems from configuration rather than from the data itself
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidRange { .. } | Self::InvalidParameter { .. })
    }
}

/// Non-fatal findings recorded while building a plot.
///
/// Each diagnostic is also logged through `tracing` at the point it is detected.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A configuration value was unusable and has been replaced.
    ConfigCorrection {
        /// Name of the corrected setting
        setting: &'static str,
        /// Value as supplied
        supplied: String,
        /// Value used instead
        substituted: String,
    },
    /// The resolved scale bounds do not cover every observed value.
    ///
    /// Points outside the scale are still drawn; their colour clips to the
    /// nearest extreme and their shape to the nearest breakpoint.
    ScaleExcludesData {
        /// Affected axis
        axis: ScaleAxis,
    },
    /// The supplied plot extent leaves some points outside the visible area.
    ExtentExcludesData,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ConfigCorrection {
                setting,
                supplied,
                substituted,
            } => write!(
                f,
                "'{supplied}' is not a valid value for {setting}; '{substituted}' will be used"
            ),
            Diagnostic::ScaleExcludesData { axis } => write!(
                f,
                "specified minimum and maximum {axis} scale values or specified {axis} scale spread exclude some data"
            ),
            Diagnostic::ExtentExcludesData => f.write_str("specified extent excludes some data"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let range = GlyphError::InvalidRange {
            axis: ScaleAxis::Shape,
            min: 2.0,
            max: 1.0,
        };
        assert!(range.is_configuration_error());
        assert!(range.to_string().contains("shape"));

        let input = GlyphError::invalid_input("Empty input lists");
        assert!(!input.is_configuration_error());
        assert!(input.to_string().contains("Empty input lists"));

        let param = GlyphError::invalid_parameter("interval_type", "unsupported");
        assert!(param.is_configuration_error());
        assert!(param.to_string().contains("interval_type"));
    }

    #[test]
    fn test_diagnostic_messages() {
        let d = Diagnostic::ConfigCorrection {
            setting: "shape",
            supplied: "hexagon".to_string(),
            substituted: "sine".to_string(),
        };
        assert!(d.to_string().contains("hexagon"));
        assert!(d.to_string().contains("sine"));

        let d = Diagnostic::ScaleExcludesData {
            axis: ScaleAxis::Colour,
        };
        assert!(d.to_string().contains("colour scale"));
    }
}
