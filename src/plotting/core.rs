//! Core geometry types and the rendering seam of the glyph plotting system.
//!
//! Building a plot produces plain data: [`Glyph`]s, an optional [`Legend`]
//! and a [`FigureLayout`]. Anything that can draw implements [`GlyphCanvas`]
//! and receives that data through [`GlyphPlot::render`](super::GlyphPlot::render).

use std::convert::Infallible;
use std::sync::Arc;

use ndarray::Array1;

use super::config::FigureSize;
use crate::colour::Rgba;
use crate::utils::generation::{ShapeFamily, WaveformOutline};

/// Inner disc diameter relative to the glyph size.
pub const INNER_DISC_RATIO: f64 = 0.6;

/// Visible area of the plot in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Left edge
    pub x_min: f64,
    /// Right edge
    pub x_max: f64,
    /// Bottom edge
    pub y_min: f64,
    /// Top edge
    pub y_max: f64,
}

impl Extent {
    /// Creates an extent from its edges.
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Creates an extent from `[x_min, x_max, y_min, y_max]`.
    pub const fn from_array([x_min, x_max, y_min, y_max]: [f64; 4]) -> Self {
        Self::new(x_min, x_max, y_min, y_max)
    }

    /// The extent as `[x_min, x_max, y_min, y_max]`.
    pub const fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.x_max, self.y_min, self.y_max]
    }

    /// Tightest extent holding every point.
    pub fn of_points(x: &Array1<f64>, y: &Array1<f64>) -> Self {
        let lo = |a: &Array1<f64>| a.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = |a: &Array1<f64>| a.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::new(lo(x), hi(x), lo(y), hi(y))
    }

    /// Grows every edge by `fraction` of the larger of the two spans.
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = (self.x_max - self.x_min).max(self.y_max - self.y_min) * fraction;
        Self::new(
            self.x_min - pad,
            self.x_max + pad,
            self.y_min - pad,
            self.y_max + pad,
        )
    }

    /// Whether `other` lies entirely inside this extent.
    pub fn contains(&self, other: &Extent) -> bool {
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }
}

/// Marker geometry of one glyph layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// A filled circle.
    Circle,
    /// A filled waveform outline, shared between glyphs of the same style.
    Outline(Arc<WaveformOutline>),
}

/// One filled marker of a glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphLayer {
    /// Marker geometry
    pub marker: Marker,
    /// Marker diameter, in the same unit as the point size
    pub diameter: f64,
    /// Fill colour
    pub fill: Rgba,
}

/// A composite marker: outer ring, waveform and inner disc, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Nominal marker size
    pub size: f64,
    /// Waveform family
    pub family: ShapeFamily,
    /// Waveform frequency
    pub frequency: u32,
    /// Layers, bottom first
    pub layers: [GlyphLayer; 3],
}

impl Glyph {
    /// Stacks the three layers of a glyph at `(x, y)`.
    pub fn compose(x: f64, y: f64, size: f64, outline: Arc<WaveformOutline>, fill: Rgba) -> Self {
        let family = outline.family();
        let frequency = outline.frequency();
        let outline_diameter = size * outline.max_abs_coordinate();
        Self {
            x,
            y,
            size,
            family,
            frequency,
            layers: [
                GlyphLayer {
                    marker: Marker::Circle,
                    diameter: size,
                    fill: Rgba::BLACK,
                },
                GlyphLayer {
                    marker: Marker::Outline(outline),
                    diameter: outline_diameter,
                    fill: Rgba::WHITE,
                },
                GlyphLayer {
                    marker: Marker::Circle,
                    diameter: size * INNER_DISC_RATIO,
                    fill,
                },
            ],
        }
    }

    /// Fill of the inner disc.
    pub fn fill(&self) -> Rgba {
        self.layers[2].fill
    }

    /// The waveform outline.
    pub fn outline(&self) -> Option<&WaveformOutline> {
        self.layers.iter().find_map(|layer| match &layer.marker {
            Marker::Outline(outline) => Some(outline.as_ref()),
            Marker::Circle => None,
        })
    }
}

/// A colour key entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendColourEntry {
    /// Colour breakpoint
    pub value: f64,
    /// Its colour
    pub colour: Rgba,
}

/// A shape key entry, drawn as a grey glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendShapeEntry {
    /// Shape breakpoint
    pub value: f64,
    /// Glyph for the breakpoint
    pub glyph: Glyph,
}

/// Keys for both encoded variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Title of the colour key
    pub colour_label: String,
    /// Title of the shape key
    pub shape_label: String,
    /// One entry per colour breakpoint, in scale order
    pub colour_entries: Vec<LegendColourEntry>,
    /// One entry per shape breakpoint, in scale order
    pub shape_entries: Vec<LegendShapeEntry>,
    /// Marker size used for every entry
    pub marker_size: f64,
}

impl Legend {
    /// Rows needed to stack the longer of the two keys below their titles.
    pub fn rows(&self) -> usize {
        self.colour_entries.len().max(self.shape_entries.len()) + 1
    }

    /// Marker size that fits `rows` entries into a key column of a figure.
    pub fn marker_size_for(figure: FigureSize, rows: usize) -> f64 {
        let by_height = figure.height / (2.0 * rows as f64);
        let by_width = figure.width / 15.0;
        by_height.min(by_width) / 0.014
    }
}

/// Figure-level settings handed to the canvas before any glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureLayout {
    /// Figure size in inches
    pub size: FigureSize,
    /// Visible data area
    pub extent: Extent,
    /// Figure title
    pub title: Option<String>,
    /// X-axis label
    pub x_label: Option<String>,
    /// Y-axis label
    pub y_label: Option<String>,
    /// Whether axes are drawn
    pub show_axes: bool,
    /// Whether a legend follows the glyphs
    pub show_legend: bool,
}

/// A drawing surface for glyph plots.
///
/// One canvas is passed into each render call; it is never global state.
pub trait GlyphCanvas {
    /// Error raised by the backend.
    type Error;

    /// Prepares the figure.
    fn begin(&mut self, layout: &FigureLayout) -> Result<(), Self::Error>;

    /// Draws one data glyph.
    fn draw_glyph(&mut self, glyph: &Glyph) -> Result<(), Self::Error>;

    /// Draws the legend.
    fn draw_legend(&mut self, legend: &Legend) -> Result<(), Self::Error>;

    /// Called once after everything else was drawn.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A canvas that keeps every call in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCanvas {
    layout: Option<FigureLayout>,
    glyphs: Vec<Glyph>,
    legend: Option<Legend>,
    finished: bool,
}

impl RecordingCanvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout received by `begin`.
    pub fn layout(&self) -> Option<&FigureLayout> {
        self.layout.as_ref()
    }

    /// Glyphs in drawing order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Legend, if one was drawn.
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Whether `finish` was called.
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

impl GlyphCanvas for RecordingCanvas {
    type Error = Infallible;

    fn begin(&mut self, layout: &FigureLayout) -> Result<(), Self::Error> {
        self.layout = Some(layout.clone());
        self.glyphs.clear();
        self.legend = None;
        self.finished = false;
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: &Glyph) -> Result<(), Self::Error> {
        self.glyphs.push(glyph.clone());
        Ok(())
    }

    fn draw_legend(&mut self, legend: &Legend) -> Result<(), Self::Error> {
        self.legend = Some(legend.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generation::glyph_outline;
    use approx_eq::assert_approx_eq;
    use ndarray::array;

    #[test]
    fn test_extent_of_points_and_padding() {
        let extent = Extent::of_points(&array![0.0, 4.0, 2.0], &array![1.0, 3.0, 2.0]);
        assert_eq!(extent.to_array(), [0.0, 4.0, 1.0, 3.0]);

        let padded = extent.padded(0.1);
        assert_approx_eq!(padded.x_min, -0.4, 1e-12);
        assert_approx_eq!(padded.x_max, 4.4, 1e-12);
        assert_approx_eq!(padded.y_min, 0.6, 1e-12);
        assert_approx_eq!(padded.y_max, 3.4, 1e-12);
        assert!(padded.contains(&extent));
        assert!(!extent.contains(&padded));
    }

    #[test]
    fn test_glyph_layers() {
        let outline = Arc::new(glyph_outline(ShapeFamily::Sine, 3));
        let fill = Rgba::from_rgb8(10, 20, 30);
        let glyph = Glyph::compose(1.0, 2.0, 20.0, outline.clone(), fill);

        assert_eq!(glyph.family, ShapeFamily::Sine);
        assert_eq!(glyph.frequency, 3);
        assert_eq!(glyph.layers[0].marker, Marker::Circle);
        assert_eq!(glyph.layers[0].fill, Rgba::BLACK);
        assert_approx_eq!(glyph.layers[0].diameter, 20.0, 1e-12);

        assert_eq!(glyph.layers[1].fill, Rgba::WHITE);
        assert_approx_eq!(
            glyph.layers[1].diameter,
            20.0 * outline.max_abs_coordinate(),
            1e-12
        );
        assert!(glyph.layers[1].diameter < glyph.layers[0].diameter);

        assert_approx_eq!(glyph.layers[2].diameter, 12.0, 1e-12);
        assert_eq!(glyph.fill(), fill);
        assert_eq!(glyph.outline(), Some(outline.as_ref()));
    }

    #[test]
    fn test_legend_marker_size() {
        let figure = FigureSize {
            width: 10.0,
            height: 20.0 / 3.0,
        };
        // height-limited: 6.667 / 16 < 10 / 15
        let size = Legend::marker_size_for(figure, 8);
        assert_approx_eq!(size, (20.0 / 3.0) / 16.0 / 0.014, 1e-9);
    }

    #[test]
    fn test_recording_canvas_resets_on_begin() {
        let mut canvas = RecordingCanvas::new();
        let outline = Arc::new(glyph_outline(ShapeFamily::Square, 0));
        let glyph = Glyph::compose(0.0, 0.0, 1.0, outline, Rgba::WHITE);
        let layout = FigureLayout {
            size: FigureSize {
                width: 10.0,
                height: 5.0,
            },
            extent: Extent::new(0.0, 1.0, 0.0, 1.0),
            title: None,
            x_label: None,
            y_label: None,
            show_axes: true,
            show_legend: false,
        };

        canvas.begin(&layout).unwrap();
        canvas.draw_glyph(&glyph).unwrap();
        assert_eq!(canvas.glyphs().len(), 1);

        canvas.begin(&layout).unwrap();
        assert!(canvas.glyphs().is_empty());
        assert!(!canvas.is_finished());
        assert_eq!(canvas.layout(), Some(&layout));
    }
}
