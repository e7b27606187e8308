//! Plot composition.
//!
//! [`GlyphPlot::build`] runs the whole pipeline once: settings are resolved,
//! the colour, shape and frequency scales are computed, every point is
//! classified, and outlines are generated for each distinct
//! `(family, frequency)` pair. The result is immutable and can be rendered to
//! any number of canvases.

use std::collections::HashMap;
use std::sync::Arc;

use ndarray::Array1;
use tracing::{debug, warn};

#[cfg(feature = "parallel-processing")]
use rayon::prelude::*;

use super::config::{FigureSize, GlyphPlotConfig};
use super::core::{
    Extent, FigureLayout, Glyph, GlyphCanvas, Legend, LegendColourEntry, LegendShapeEntry,
};
use crate::classify::{Classification, GlyphClassifier, IntervalType, ShapeSelection};
use crate::colour::{ColourMapping, Palette, Rgba};
use crate::data::GlyphData;
use crate::scales::{
    FrequencyScale, Scale, ScaleSpec, ShapeScale, colour_scale, frequency_scale, shape_scale,
};
use crate::utils::generation::{ShapeFamily, WaveformOutline, glyph_outline};
use crate::utils::numeric::is_divergent;
use crate::{Diagnostic, GlyphError, GlyphResult, ScaleAxis};

/// Colour breakpoints for a divergent plot when neither count is given.
pub const DEFAULT_DIVERGENT_COLOUR_COUNT: usize = 7;
/// Fraction of the larger data span added around a derived extent.
pub const EXTENT_PADDING: f64 = 0.1;

type OutlineCache = HashMap<(ShapeFamily, u32), Arc<WaveformOutline>>;

/// A fully built glyph scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPlot {
    layout: FigureLayout,
    divergent: bool,
    palette: Palette,
    interval: IntervalType,
    colour_scale: Scale,
    shape_scale: ShapeScale,
    frequencies: FrequencyScale,
    glyphs: Vec<Glyph>,
    legend: Option<Legend>,
    diagnostics: Vec<Diagnostic>,
}

impl GlyphPlot {
    /// Builds a plot from `data`.
    ///
    /// Unusable names and size hints are replaced by defaults and reported in
    /// [`diagnostics`](Self::diagnostics), as are scale bounds or an extent
    /// that leave data out.
    ///
    /// # Errors
    /// Nothing is built if any of these fail:
    /// - `interval_type` is not `"closest"` or `"limit"`
    /// - either scale spec is invalid, e.g. explicit `min >= max`
    /// - the extent is malformed
    /// - a colour value lies beyond the scientific colour table
    ///
    /// # Example
    /// ```rust
    /// use entropy_glyphs::data::GlyphData;
    /// use entropy_glyphs::plotting::{GlyphPlot, GlyphPlotConfig, RecordingCanvas};
    ///
    /// let data = GlyphData::from_columns(
    ///     &[0.0, 1.0, 2.0],
    ///     &[0.0, 1.0, 0.5],
    ///     &[12.0, 15.5, 19.0],
    ///     &[0.2, 0.8, 1.4],
    ///     &[20.0, 20.0, 20.0],
    /// )?;
    /// let plot = GlyphPlot::build(&data, &GlyphPlotConfig::default())?;
    ///
    /// let mut canvas = RecordingCanvas::new();
    /// plot.render(&mut canvas).unwrap();
    /// assert_eq!(canvas.glyphs().len(), 3);
    /// # Ok::<(), entropy_glyphs::GlyphError>(())
    /// ```
    pub fn build(data: &GlyphData, config: &GlyphPlotConfig) -> GlyphResult<Self> {
        let interval = config.interval_type.parse::<IntervalType>()?;
        config.validate()?;

        let mut diagnostics = Vec::new();
        let colour_values = contiguous(data.colour_values(), "colour")?;
        let shape_values = contiguous(data.shape_values(), "shape")?;

        let divergent = config
            .divergent
            .unwrap_or_else(|| is_divergent(shape_values));
        let shapes = resolve_shapes(config, divergent, &mut diagnostics);
        let palette = resolve_palette(&config.colormap, &mut diagnostics);

        let colour_spec = ScaleSpec {
            count: Some(resolve_colour_count(
                config.colour_scale.count,
                config.shape_scale.count,
                divergent,
            )),
            ..config.colour_scale
        };
        let colour_scale = colour_scale(colour_values, &colour_spec, config.decimal_places)?;
        let shape_scale = shape_scale(
            shape_values,
            &config.shape_scale,
            divergent,
            config.decimal_places,
        )?;
        let frequencies = frequency_scale(shape_scale.breakpoints(), divergent)?;

        if let Some(requested) = shape_scale.clamped_from() {
            diagnostics.push(Diagnostic::ConfigCorrection {
                setting: "shape_n",
                supplied: requested.to_string(),
                substituted: shape_scale.count().to_string(),
            });
        }
        if colour_scale.excludes_data() {
            diagnostics.push(Diagnostic::ScaleExcludesData {
                axis: ScaleAxis::Colour,
            });
        }
        if shape_scale.excludes_data() {
            diagnostics.push(Diagnostic::ScaleExcludesData {
                axis: ScaleAxis::Shape,
            });
        }

        let mapping = ColourMapping::new(palette, &colour_scale);
        let classifier = GlyphClassifier::new(
            shapes,
            shape_scale.breakpoints(),
            &frequencies,
            interval,
            &mapping,
        )?;

        let styles = data
            .samples()
            .map(|s| classifier.classify(s.colour, s.shape))
            .collect::<GlyphResult<Vec<Classification>>>()?;

        let legend_shapes: Vec<(f64, ShapeFamily, u32)> = shape_scale
            .breakpoints()
            .iter()
            .zip(frequencies.as_slice())
            .map(|(&value, &frequency)| (value, classifier.classify_shape(value), frequency))
            .collect();
        let legend_colours = if config.show_legend {
            colour_scale
                .breakpoints()
                .iter()
                .map(|&value| {
                    Ok(LegendColourEntry {
                        value,
                        colour: classifier.classify_colour(value)?,
                    })
                })
                .collect::<GlyphResult<Vec<_>>>()?
        } else {
            Vec::new()
        };

        let mut keys: Vec<(ShapeFamily, u32)> =
            styles.iter().map(|c| (c.family, c.frequency)).collect();
        if config.show_legend {
            keys.extend(legend_shapes.iter().map(|&(_, family, frequency)| (family, frequency)));
        }
        let outlines = generate_outlines(keys);

        let glyphs: Vec<Glyph> = data
            .samples()
            .zip(&styles)
            .map(|(s, style)| {
                let outline = outline_for(&outlines, style.family, style.frequency);
                Glyph::compose(s.x, s.y, s.size, outline, style.colour)
            })
            .collect();

        let extent = resolve_extent(config.extent, data, &mut diagnostics);
        let size = FigureSize::resolve(
            config.width,
            config.height,
            config.show_legend,
            &mut diagnostics,
        );

        let legend = config.show_legend.then(|| {
            let rows = legend_colours.len().max(legend_shapes.len()) + 1;
            let marker_size = Legend::marker_size_for(size, rows);
            let shape_entries = legend_shapes
                .iter()
                .map(|&(value, family, frequency)| LegendShapeEntry {
                    value,
                    glyph: Glyph::compose(
                        0.0,
                        0.0,
                        marker_size,
                        outline_for(&outlines, family, frequency),
                        Rgba::LEGEND_GREY,
                    ),
                })
                .collect();
            Legend {
                colour_label: config.colour_label.clone(),
                shape_label: config.shape_label.clone(),
                colour_entries: legend_colours,
                shape_entries,
                marker_size,
            }
        });

        debug!(
            points = glyphs.len(),
            outlines = outlines.len(),
            divergent,
            %palette,
            "built glyph plot"
        );

        Ok(Self {
            layout: FigureLayout {
                size,
                extent,
                title: config.title.clone(),
                x_label: config.x_label.clone(),
                y_label: config.y_label.clone(),
                show_axes: config.show_axes,
                show_legend: config.show_legend,
            },
            divergent,
            palette,
            interval,
            colour_scale,
            shape_scale,
            frequencies,
            glyphs,
            legend,
            diagnostics,
        })
    }

    /// Draws the plot: layout first, then every glyph in input order, then the legend.
    pub fn render<C: GlyphCanvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.begin(&self.layout)?;
        for glyph in &self.glyphs {
            canvas.draw_glyph(glyph)?;
        }
        if let Some(legend) = &self.legend {
            canvas.draw_legend(legend)?;
        }
        canvas.finish()
    }

    /// Figure settings.
    pub const fn layout(&self) -> &FigureLayout {
        &self.layout
    }

    /// Whether the divergent layout was used.
    pub const fn is_divergent(&self) -> bool {
        self.divergent
    }

    /// Palette in use after name resolution.
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Interval classification mode.
    pub const fn interval_type(&self) -> IntervalType {
        self.interval
    }

    /// The colour scale.
    pub const fn colour_scale(&self) -> &Scale {
        &self.colour_scale
    }

    /// The shape scale.
    pub const fn shape_scale(&self) -> &ShapeScale {
        &self.shape_scale
    }

    /// Frequencies paired with the shape scale.
    pub const fn frequency_scale(&self) -> &FrequencyScale {
        &self.frequencies
    }

    /// One glyph per input point, in input order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The legend, unless disabled.
    pub const fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Corrections and warnings recorded while building.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Colour breakpoint count: explicit, else tied to the shape count.
pub fn resolve_colour_count(
    colour_count: Option<usize>,
    shape_count: Option<usize>,
    divergent: bool,
) -> usize {
    match (colour_count, shape_count) {
        (Some(n), _) => n,
        (None, None) if divergent => DEFAULT_DIVERGENT_COLOUR_COUNT,
        (None, None) => crate::scales::DEFAULT_COLOUR_COUNT,
        (None, Some(n)) if divergent => (2 * n).saturating_sub(1),
        (None, Some(n)) => n,
    }
}

fn resolve_family(
    setting: &'static str,
    name: &str,
    fallback: ShapeFamily,
    diagnostics: &mut Vec<Diagnostic>,
) -> ShapeFamily {
    name.parse().unwrap_or_else(|_| {
        warn!("{name} is not a valid shape. {fallback} will be used.");
        diagnostics.push(Diagnostic::ConfigCorrection {
            setting,
            supplied: name.to_string(),
            substituted: fallback.to_string(),
        });
        fallback
    })
}

fn resolve_shapes(
    config: &GlyphPlotConfig,
    divergent: bool,
    diagnostics: &mut Vec<Diagnostic>,
) -> ShapeSelection {
    if divergent {
        ShapeSelection::Divergent {
            positive: resolve_family("shape_pos", &config.shape_pos, ShapeFamily::Sine, diagnostics),
            negative: resolve_family(
                "shape_neg",
                &config.shape_neg,
                ShapeFamily::Square,
                diagnostics,
            ),
        }
    } else {
        ShapeSelection::Single(resolve_family(
            "shape",
            &config.shape,
            ShapeFamily::Sine,
            diagnostics,
        ))
    }
}

/// Borrows a data column as a slice.
fn contiguous<'a>(column: &'a Array1<f64>, name: &str) -> GlyphResult<&'a [f64]> {
    column
        .as_slice()
        .ok_or_else(|| GlyphError::invalid_input(format!("{name} values are not contiguous")))
}

fn resolve_palette(name: &str, diagnostics: &mut Vec<Diagnostic>) -> Palette {
    name.parse().unwrap_or_else(|_| {
        let fallback = Palette::default();
        warn!("{name} is not a valid colormap. {fallback} will be used.");
        diagnostics.push(Diagnostic::ConfigCorrection {
            setting: "colormap",
            supplied: name.to_string(),
            substituted: fallback.to_string(),
        });
        fallback
    })
}

fn resolve_extent(
    supplied: Option<[f64; 4]>,
    data: &GlyphData,
    diagnostics: &mut Vec<Diagnostic>,
) -> Extent {
    let bounds = Extent::of_points(data.x_values(), data.y_values());
    match supplied {
        Some(limits) => {
            let extent = Extent::from_array(limits);
            if !extent.contains(&bounds) {
                warn!("specified extent excludes some data");
                diagnostics.push(Diagnostic::ExtentExcludesData);
            }
            extent
        }
        None => bounds.padded(EXTENT_PADDING),
    }
}

fn generate_outlines(mut keys: Vec<(ShapeFamily, u32)>) -> OutlineCache {
    keys.sort_unstable_by_key(|&(family, frequency)| (family.name(), frequency));
    keys.dedup();

    #[cfg(feature = "parallel-processing")]
    let iter = keys.into_par_iter();
    #[cfg(not(feature = "parallel-processing"))]
    let iter = keys.into_iter();

    iter.map(|(family, frequency)| {
        (
            (family, frequency),
            Arc::new(glyph_outline(family, frequency)),
        )
    })
    .collect()
}

fn outline_for(cache: &OutlineCache, family: ShapeFamily, frequency: u32) -> Arc<WaveformOutline> {
    cache
        .get(&(family, frequency))
        .cloned()
        .unwrap_or_else(|| Arc::new(glyph_outline(family, frequency)))
}
