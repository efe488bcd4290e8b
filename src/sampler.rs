//! Reads one RGB sample per pixel out of a decoded image.

use image::{DynamicImage, GenericImageView, Pixel, Rgb, RgbImage, RgbaImage};

use crate::Grid;

/// Anything that can report its size and hand out RGB samples by coordinate.
///
/// Alpha, if the source has any, is dropped.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// The sample at `(x, y)`. Out-of-range coordinates may panic.
    fn rgb(&self, x: u32, y: u32) -> Rgb<u8>;
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgb(&self, x: u32, y: u32) -> Rgb<u8> {
        self.get_pixel(x, y).to_rgb()
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.get_pixel(x, y)
    }
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb(&self, x: u32, y: u32) -> Rgb<u8> {
        self.get_pixel(x, y).to_rgb()
    }
}

/// Sample a `height` x `width` color grid from `source`.
///
/// The caller is expected to have resized the image already; both dimensions
/// must lie within the source's bounds.
pub fn sample<S: PixelSource + ?Sized>(source: &S, height: u32, width: u32) -> Grid<Rgb<u8>> {
    log::debug!(
        "sampling {}x{} from a {:?} source",
        width,
        height,
        source.dimensions()
    );
    Grid::from_fn(width as usize, height as usize, |x, y| {
        source.rgb(x as u32, y as u32)
    })
}
