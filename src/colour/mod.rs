//! Colour values, palettes and value-to-colour mappings.
//!
//! Two palettes are supported: any of the continuous colormaps provided by
//! `colorous`, addressed by their conventional names, and the fixed
//! [scientific table](scientific). A [`ColourMapping`] binds a palette to the
//! range of a colour scale.

pub mod scientific;

use std::fmt;
use std::str::FromStr;

use colorous::Gradient;

use crate::scales::Scale;
use crate::{GlyphError, GlyphResult};

pub use scientific::{SCIENTIFIC_COLOURS, SCIENTIFIC_LIMITS, scientific_colour};

/// An RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// Opaque black, the outer ring of every glyph.
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white, the waveform layer of every glyph.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    /// Neutral grey used for the inner disc of legend glyphs.
    pub const LEGEND_GREY: Rgba = Rgba::new(0.74902, 0.74902, 0.74902, 1.0);

    /// Creates a colour from its components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque colour from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        )
    }

    /// The colour as 8-bit channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb` notation; alpha is dropped.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<colorous::Color> for Rgba {
    fn from(c: colorous::Color) -> Self {
        Rgba::from_rgb8(c.r, c.g, c.b)
    }
}

// Names follow the usual plotting-library spelling; lookup ignores case.
const COLORMAPS: [(&str, Gradient); 38] = [
    ("viridis", colorous::VIRIDIS),
    ("plasma", colorous::PLASMA),
    ("inferno", colorous::INFERNO),
    ("magma", colorous::MAGMA),
    ("cividis", colorous::CIVIDIS),
    ("turbo", colorous::TURBO),
    ("warm", colorous::WARM),
    ("cool", colorous::COOL),
    ("cubehelix", colorous::CUBEHELIX),
    ("rainbow", colorous::RAINBOW),
    ("sinebow", colorous::SINEBOW),
    ("blues", colorous::BLUES),
    ("greens", colorous::GREENS),
    ("greys", colorous::GREYS),
    ("oranges", colorous::ORANGES),
    ("purples", colorous::PURPLES),
    ("reds", colorous::REDS),
    ("bugn", colorous::BLUE_GREEN),
    ("bupu", colorous::BLUE_PURPLE),
    ("gnbu", colorous::GREEN_BLUE),
    ("orrd", colorous::ORANGE_RED),
    ("pubugn", colorous::PURPLE_BLUE_GREEN),
    ("pubu", colorous::PURPLE_BLUE),
    ("purd", colorous::PURPLE_RED),
    ("rdpu", colorous::RED_PURPLE),
    ("ylgnbu", colorous::YELLOW_GREEN_BLUE),
    ("ylgn", colorous::YELLOW_GREEN),
    ("ylorbr", colorous::YELLOW_ORANGE_BROWN),
    ("ylorrd", colorous::YELLOW_ORANGE_RED),
    ("brbg", colorous::BROWN_GREEN),
    ("prgn", colorous::PURPLE_GREEN),
    ("piyg", colorous::PINK_GREEN),
    ("puor", colorous::PURPLE_ORANGE),
    ("rdbu", colorous::RED_BLUE),
    ("rdgy", colorous::RED_GREY),
    ("rdylbu", colorous::RED_YELLOW_BLUE),
    ("rdylgn", colorous::RED_YELLOW_GREEN),
    ("spectral", colorous::SPECTRAL),
];

/// A named continuous colormap, optionally reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colormap {
    index: usize,
    reversed: bool,
}

impl Colormap {
    /// The default colormap.
    pub const VIRIDIS: Colormap = Colormap {
        index: 0,
        reversed: false,
    };

    /// Looks up a colormap by name. A trailing `_r` reverses it.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        COLORMAPS
            .iter()
            .position(|(n, _)| *n == base)
            .map(|index| Colormap { index, reversed })
    }

    /// Canonical (lower-case) name, without the reversal suffix.
    pub fn name(&self) -> &'static str {
        COLORMAPS[self.index].0
    }

    /// Whether the colormap runs backwards.
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Colour at position `t`; `t` is clamped to `[0, 1]`.
    pub fn eval(&self, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let t = if self.reversed { 1.0 - t } else { t };
        COLORMAPS[self.index].1.eval_continuous(t).into()
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        if self.reversed {
            f.write_str("_r")?;
        }
        Ok(())
    }
}

/// Source of glyph fill colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// A continuous colormap stretched over the colour scale.
    Continuous(Colormap),
    /// The fixed scientific temperature table.
    Scientific,
}

impl Palette {
    /// Names that select [`Palette::Scientific`].
    pub const SCIENTIFIC_NAMES: [&'static str; 2] = ["metoffice", "scientific"];
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Continuous(Colormap::VIRIDIS)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Palette::Continuous(colormap) => colormap.fmt(f),
            Palette::Scientific => f.write_str(Self::SCIENTIFIC_NAMES[0]),
        }
    }
}

impl FromStr for Palette {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::SCIENTIFIC_NAMES
            .iter()
            .any(|n| n.eq_ignore_ascii_case(s.trim()))
        {
            return Ok(Palette::Scientific);
        }
        Colormap::from_name(s)
            .map(Palette::Continuous)
            .ok_or_else(|| {
                GlyphError::invalid_parameter("colormap", format!("'{s}' is not a valid colormap"))
            })
    }
}

/// A palette bound to the range of a colour scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourMapping {
    /// Continuous colormap normalised over `[min, max]`, clipping outside it.
    Continuous {
        /// Colormap to evaluate
        colormap: Colormap,
        /// Value mapped to the start of the colormap
        min: f64,
        /// Value mapped to the end of the colormap
        max: f64,
    },
    /// Fixed scientific table; independent of the colour scale.
    Scientific,
}

impl ColourMapping {
    /// Binds `palette` to the smallest and largest breakpoints of `colour_scale`.
    pub fn new(palette: Palette, colour_scale: &Scale) -> Self {
        match palette {
            Palette::Scientific => ColourMapping::Scientific,
            Palette::Continuous(colormap) => ColourMapping::Continuous {
                colormap,
                min: colour_scale.min_breakpoint().unwrap_or(0.0),
                max: colour_scale.max_breakpoint().unwrap_or(0.0),
            },
        }
    }

    /// Normalised position of `value` in `[0, 1]`, for continuous mappings.
    ///
    /// A degenerate range maps everything to 0.
    pub fn normalise(&self, value: f64) -> Option<f64> {
        match *self {
            ColourMapping::Continuous { min, max, .. } => {
                if max > min {
                    Some(((value - min) / (max - min)).clamp(0.0, 1.0))
                } else {
                    Some(0.0)
                }
            }
            ColourMapping::Scientific => None,
        }
    }

    /// Colour for `value`.
    ///
    /// # Errors
    /// With the scientific table, values above its last cutoff are rejected.
    pub fn colour_for(&self, value: f64) -> GlyphResult<Rgba> {
        match self {
            ColourMapping::Continuous { colormap, .. } => {
                let t = self.normalise(value).unwrap_or(0.0);
                Ok(colormap.eval(t))
            }
            ColourMapping::Scientific => scientific_colour(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{ScaleSpec, colour_scale};

    #[test]
    fn test_rgba_conversions() {
        let c = Rgba::from_rgb8(255, 128, 0);
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(c.to_hex(), "#ff8000");
        assert_eq!(Rgba::LEGEND_GREY.to_rgba8()[0], 191);
    }

    #[test]
    fn test_colormap_lookup() {
        let map = Colormap::from_name("Viridis").unwrap();
        assert_eq!(map, Colormap::VIRIDIS);
        let rev = Colormap::from_name("RdBu_r").unwrap();
        assert_eq!(rev.name(), "rdbu");
        assert!(rev.is_reversed());
        assert_eq!(rev.to_string(), "rdbu_r");
        assert!(Colormap::from_name("not_a_map").is_none());
    }

    #[test]
    fn test_reversed_colormap_mirrors() {
        let map = Colormap::from_name("plasma").unwrap();
        let rev = Colormap::from_name("plasma_r").unwrap();
        assert_eq!(map.eval(0.0), rev.eval(1.0));
        assert_eq!(map.eval(1.0), rev.eval(0.0));
    }

    #[test]
    fn test_palette_parsing() {
        assert_eq!("metoffice".parse::<Palette>().unwrap(), Palette::Scientific);
        assert_eq!("Scientific".parse::<Palette>().unwrap(), Palette::Scientific);
        assert_eq!(
            "magma".parse::<Palette>().unwrap(),
            Palette::Continuous(Colormap::from_name("magma").unwrap())
        );
        assert!("jet2".parse::<Palette>().is_err());
        assert_eq!(Palette::default().to_string(), "viridis");
    }

    #[test]
    fn test_continuous_mapping_clips() {
        let scale = colour_scale(&[0.0, 10.0], &ScaleSpec::new(), 1).unwrap();
        let mapping = ColourMapping::new(Palette::default(), &scale);

        assert_eq!(mapping.normalise(5.0), Some(0.5));
        assert_eq!(mapping.normalise(-3.0), Some(0.0));
        assert_eq!(mapping.normalise(42.0), Some(1.0));
        assert_eq!(
            mapping.colour_for(-3.0).unwrap(),
            mapping.colour_for(0.0).unwrap()
        );
        assert_eq!(
            mapping.colour_for(42.0).unwrap(),
            mapping.colour_for(10.0).unwrap()
        );
        assert_ne!(
            mapping.colour_for(0.0).unwrap(),
            mapping.colour_for(10.0).unwrap()
        );
    }

    #[test]
    fn test_degenerate_range_maps_to_start() {
        let scale = colour_scale(&[3.0, 3.0], &ScaleSpec::new(), 1).unwrap();
        let mapping = ColourMapping::new(Palette::default(), &scale);
        assert_eq!(mapping.normalise(3.0), Some(0.0));
        assert_eq!(mapping.normalise(100.0), Some(0.0));
    }

    #[test]
    fn test_scientific_mapping() {
        let scale = colour_scale(&[0.0, 10.0], &ScaleSpec::new(), 1).unwrap();
        let mapping = ColourMapping::new(Palette::Scientific, &scale);
        assert_eq!(mapping.normalise(1.0), None);
        assert!(mapping.colour_for(10.0).is_ok());
        assert!(mapping.colour_for(75.0).is_err());
    }
}
