//! Plot-wide configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::classify::IntervalType;
use crate::scales::ScaleSpec;
use crate::{Diagnostic, GlyphError, GlyphResult, ScaleAxis};

/// Figure width in inches when no size hint is usable.
pub const DEFAULT_FIGURE_WIDTH: f64 = 10.0;

/// Configuration for building a [`GlyphPlot`](super::GlyphPlot).
///
/// Every field is optional in serialized form; missing fields take the
/// values of [`GlyphPlotConfig::new`].
///
/// # Example
/// ```rust
/// use entropy_glyphs::plotting::GlyphPlotConfig;
/// use entropy_glyphs::scales::ScaleSpec;
///
/// let config = GlyphPlotConfig::new()
///     .with_colormap("magma")
///     .with_shape_scale(ScaleSpec::new().with_count(3))
///     .with_decimal_places(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphPlotConfig {
    /// Continuous colormap name, or `"metoffice"`/`"scientific"` for the fixed table.
    pub colormap: String,
    /// Bounds, spread and count for the colour scale.
    pub colour_scale: ScaleSpec,
    /// Bounds, spread and count for the shape scale.
    pub shape_scale: ScaleSpec,
    /// Waveform family for non-divergent plots.
    pub shape: String,
    /// Waveform family for positive values of divergent plots.
    pub shape_pos: String,
    /// Waveform family for non-positive values of divergent plots.
    pub shape_neg: String,
    /// Forces (or suppresses) the divergent layout; detected from the data when unset.
    pub divergent: Option<bool>,
    /// Decimal places of scale breakpoints. Negative values round to tens, hundreds, ...
    pub decimal_places: i32,
    /// `"closest"` or `"limit"`.
    pub interval_type: String,
    /// Legend title of the colour scale.
    pub colour_label: String,
    /// Legend title of the shape scale.
    pub shape_label: String,
    /// Figure title.
    pub title: Option<String>,
    /// X-axis label.
    pub x_label: Option<String>,
    /// Y-axis label.
    pub y_label: Option<String>,
    /// Figure width hint in inches.
    pub width: Option<f64>,
    /// Figure height hint in inches.
    pub height: Option<f64>,
    /// Visible area as `[x_min, x_max, y_min, y_max]`.
    pub extent: Option<[f64; 4]>,
    /// Whether to build a legend.
    pub show_legend: bool,
    /// Whether axes are drawn.
    pub show_axes: bool,
}

impl GlyphPlotConfig {
    /// Default configuration: viridis, sine/square waveforms, one decimal place.
    pub fn new() -> Self {
        Self {
            colormap: "viridis".to_string(),
            colour_scale: ScaleSpec::new(),
            shape_scale: ScaleSpec::new(),
            shape: "sine".to_string(),
            shape_pos: "sine".to_string(),
            shape_neg: "square".to_string(),
            divergent: None,
            decimal_places: 1,
            interval_type: IntervalType::Closest.name().to_string(),
            colour_label: "temperature".to_string(),
            shape_label: "variance".to_string(),
            title: None,
            x_label: None,
            y_label: None,
            width: None,
            height: None,
            extent: None,
            show_legend: true,
            show_axes: true,
        }
    }

    /// Preset using the fixed scientific colour table.
    pub fn scientific() -> Self {
        Self::new().with_colormap("metoffice")
    }

    /// Set the colormap name
    pub fn with_colormap(mut self, colormap: impl Into<String>) -> Self {
        self.colormap = colormap.into();
        self
    }

    /// Set the colour scale options
    pub const fn with_colour_scale(mut self, spec: ScaleSpec) -> Self {
        self.colour_scale = spec;
        self
    }

    /// Set the shape scale options
    pub const fn with_shape_scale(mut self, spec: ScaleSpec) -> Self {
        self.shape_scale = spec;
        self
    }

    /// Set the waveform family for non-divergent plots
    pub fn with_shape(mut self, shape: impl Into<String>) -> Self {
        self.shape = shape.into();
        self
    }

    /// Set the waveform families for divergent plots
    pub fn with_divergent_shapes(
        mut self,
        positive: impl Into<String>,
        negative: impl Into<String>,
    ) -> Self {
        self.shape_pos = positive.into();
        self.shape_neg = negative.into();
        self
    }

    /// Force or suppress the divergent layout
    pub const fn with_divergent(mut self, divergent: bool) -> Self {
        self.divergent = Some(divergent);
        self
    }

    /// Set the breakpoint precision
    pub const fn with_decimal_places(mut self, decimal_places: i32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Set the interval classification mode
    pub fn with_interval_type(mut self, interval_type: impl Into<String>) -> Self {
        self.interval_type = interval_type.into();
        self
    }

    /// Set the legend titles
    pub fn with_labels(
        mut self,
        colour_label: impl Into<String>,
        shape_label: impl Into<String>,
    ) -> Self {
        self.colour_label = colour_label.into();
        self.shape_label = shape_label.into();
        self
    }

    /// Set the figure title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the axis labels
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = Some(x_label.into());
        self.y_label = Some(y_label.into());
        self
    }

    /// Set the figure size hints
    pub const fn with_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the visible area
    pub const fn with_extent(mut self, extent: [f64; 4]) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Show or hide the legend
    pub const fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// Show or hide the axes
    pub const fn with_axes(mut self, show_axes: bool) -> Self {
        self.show_axes = show_axes;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns [`GlyphError::InvalidParameter`] for malformed documents.
    #[cfg(feature = "serialization")]
    pub fn from_json_str(json: &str) -> GlyphResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| GlyphError::invalid_parameter("config", e.to_string()))
    }

    /// Checks the settings that cannot be corrected by substituting a default.
    ///
    /// Unknown shape or colormap names and unusable size hints are not errors;
    /// they are replaced when the plot is built.
    ///
    /// # Errors
    /// - unsupported `interval_type`
    /// - an invalid colour or shape [`ScaleSpec`]
    /// - an extent with non-finite or inverted limits
    pub fn validate(&self) -> GlyphResult<()> {
        self.interval_type.parse::<IntervalType>()?;
        self.colour_scale.validate(ScaleAxis::Colour)?;
        self.shape_scale.validate(ScaleAxis::Shape)?;

        if let Some([x_min, x_max, y_min, y_max]) = self.extent {
            if [x_min, x_max, y_min, y_max].iter().any(|v| !v.is_finite()) {
                return Err(GlyphError::invalid_parameter(
                    "extent",
                    "extent limits must be finite numbers",
                ));
            }
            if x_min >= x_max || y_min >= y_max {
                return Err(GlyphError::invalid_parameter(
                    "extent",
                    "extent should be formatted as [x_min, x_max, y_min, y_max]",
                ));
            }
        }
        Ok(())
    }
}

impl Default for GlyphPlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Figure dimensions in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl FigureSize {
    /// Resolves the figure size from optional hints.
    ///
    /// Unusable hints are dropped and reported. Missing dimensions follow the
    /// aspect `⅔`, stretched by 1.5 when there is no legend.
    pub fn resolve(
        width: Option<f64>,
        height: Option<f64>,
        show_legend: bool,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Self {
        let width = usable_hint("width", width, diagnostics);
        let height = usable_hint("height", height, diagnostics);
        let aspect = if show_legend { 1.0 } else { 1.5 };
        let ratio = aspect * 2.0 / 3.0;

        match (width, height) {
            (Some(width), Some(height)) => Self { width, height },
            (Some(width), None) => Self {
                width,
                height: ratio * width,
            },
            (None, Some(height)) => Self {
                width: height / ratio,
                height,
            },
            (None, None) => Self {
                width: DEFAULT_FIGURE_WIDTH,
                height: ratio * DEFAULT_FIGURE_WIDTH,
            },
        }
    }
}

fn usable_hint(
    setting: &'static str,
    hint: Option<f64>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<f64> {
    match hint {
        Some(v) if v.is_finite() && v > 0.0 => Some(v),
        Some(v) => {
            warn!("{setting} must be a positive value. Default will be used.");
            diagnostics.push(Diagnostic::ConfigCorrection {
                setting,
                supplied: v.to_string(),
                substituted: "default".to_string(),
            });
            None
        }
        None => None,
    }
}
