//! Output size limits applied before sampling.

use crossterm::terminal;

use crate::render::STRETCH;

pub const DEFAULT_MAX_WIDTH: u32 = 1000;
pub const DEFAULT_MAX_HEIGHT: u32 = 350;

/// The largest pixel box an image is shrunk into before it is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for Footprint {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH, DEFAULT_MAX_HEIGHT)
    }
}

impl Footprint {
    /// Both limits are clamped to at least one pixel.
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
        }
    }

    /// A footprint that fills the current terminal.
    ///
    /// Every pixel takes `STRETCH` columns, and one row is left for the prompt.
    pub fn terminal() -> Self {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        log::debug!("terminal is {}x{}", cols, rows);
        Self::new(
            u32::from(cols) / STRETCH as u32,
            u32::from(rows).saturating_sub(1),
        )
    }

    /// Shrink `(width, height)` to fit inside the footprint, keeping its aspect
    /// ratio. Images that already fit come back unchanged; nothing is enlarged.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        if width <= self.max_width && height <= self.max_height {
            return (width, height);
        }
        if width == 0 || height == 0 {
            return (width.min(self.max_width), height.min(self.max_height));
        }

        let (w, h) = (u64::from(width), u64::from(height));
        let (max_w, max_h) = (u64::from(self.max_width), u64::from(self.max_height));

        // Whichever side overflows more sets the scale.
        if w * max_h >= h * max_w {
            let new_h = (h * max_w + w / 2) / w;
            (self.max_width, new_h.max(1) as u32)
        } else {
            let new_w = (w * max_h + h / 2) / h;
            (new_w.max(1) as u32, self.max_height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_left_alone() {
        let fp = Footprint::default();
        assert_eq!(fp.fit(640, 350), (640, 350));
        assert_eq!(fp.fit(1, 1), (1, 1));
    }

    #[test]
    fn wide_images_hit_the_width_limit() {
        let fp = Footprint::new(100, 100);
        assert_eq!(fp.fit(400, 200), (100, 50));
    }

    #[test]
    fn tall_images_hit_the_height_limit() {
        let fp = Footprint::default();
        // 700 rows -> 350, so width halves too
        assert_eq!(fp.fit(800, 700), (400, 350));
    }

    #[test]
    fn extreme_ratios_keep_one_pixel() {
        let fp = Footprint::new(10, 10);
        assert_eq!(fp.fit(10_000, 1), (10, 1));
        assert_eq!(fp.fit(1, 10_000), (1, 10));
    }

    #[test]
    fn fit_never_exceeds_limits() {
        let fp = Footprint::new(37, 23);
        for (w, h) in [(38, 23), (37, 24), (1000, 999), (999, 1000), (74, 46), (5, 500)] {
            let (fw, fh) = fp.fit(w, h);
            assert!(fw <= 37 && fh <= 23, "{w}x{h} -> {fw}x{fh}");
            assert!(fw >= 1 && fh >= 1);
        }
    }

    #[test]
    fn zero_limits_are_clamped() {
        assert_eq!(Footprint::new(0, 0), Footprint::new(1, 1));
    }
}
