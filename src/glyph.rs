//! Quantizes intensities onto a ramp of characters.

use crate::{Error, Grid};

/// Top of the 8-bit channel range.
pub const MAX_INTENSITY: u8 = 255;

/// Sparse to dense: the first glyph stands for black, the last for white.
pub const DEFAULT_RAMP: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// An ordered, non-empty sequence of glyphs used as a brightness scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    pub fn new(ramp: &str) -> Result<Self, Error> {
        let glyphs: Vec<char> = ramp.chars().collect();
        if glyphs.is_empty() {
            return Err(Error::EmptyRamp);
        }
        Ok(Self { glyphs })
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// `floor(intensity / 255 * (N - 1))`.
    ///
    /// The division happens in floating point before the scale, so a few
    /// intensities land one step lower than exact integer arithmetic would
    /// put them. Output depends on that, so keep it.
    pub fn index_of(&self, intensity: u8) -> usize {
        let top = (self.glyphs.len() - 1) as f64;
        (f64::from(intensity) / f64::from(MAX_INTENSITY) * top) as usize
    }

    pub fn glyph(&self, intensity: u8) -> char {
        self.glyphs[self.index_of(intensity)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

/// Replace every intensity with its glyph.
pub fn map_glyphs(intensities: &Grid<u8>, ramp: &GlyphRamp) -> Grid<char> {
    log::debug!(
        "mapping {}x{} intensities onto {} glyphs",
        intensities.width(),
        intensities.height(),
        ramp.glyphs().len()
    );
    intensities.map(|&i| ramp.glyph(i))
}
