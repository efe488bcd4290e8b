//! Turn raster images into text by mapping pixel brightness onto a ramp of
//! characters.
//!
//! The pipeline runs in four pure stages, each producing a fresh [`Grid`]:
//!
//! 1. [`sample`] reads one RGB triple per pixel
//! 2. [`reduce`] averages each triple into an intensity
//! 3. [`map_glyphs`] quantizes each intensity onto a [`GlyphRamp`]
//! 4. [`render`] prints each glyph three times per row
//!
//! ```no_run
//! use asciify::{GlyphRamp, image_to_text};
//!
//! let img = image::open("images/rick.jpg").unwrap();
//! print!("{}", image_to_text(&img, &GlyphRamp::default()));
//! ```

mod error;
mod footprint;
mod glyph;
mod grid;
mod input;
mod intensity;
mod render;
mod sampler;

pub use error::Error;
pub use footprint::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, Footprint};
pub use glyph::{DEFAULT_RAMP, GlyphRamp, MAX_INTENSITY, map_glyphs};
pub use grid::Grid;
pub use input::{DEFAULT_IMAGE_DIR, downscale, load, resolve};
pub use intensity::{intensity, reduce};
pub use render::{STRETCH, render, render_to};
pub use sampler::{PixelSource, sample};

/// Run sampling, reduction and glyph mapping over a `height` x `width` region.
pub fn convert<S: PixelSource + ?Sized>(
    source: &S,
    height: u32,
    width: u32,
    ramp: &GlyphRamp,
) -> Grid<char> {
    let colors = sample(source, height, width);
    let intensities = reduce(&colors);
    map_glyphs(&intensities, ramp)
}

/// Convert and render a whole image at its current size.
pub fn image_to_text<S: PixelSource + ?Sized>(source: &S, ramp: &GlyphRamp) -> String {
    let (width, height) = source.dimensions();
    render(&convert(source, height, width, ramp))
}
