//! Collapses color samples into a single brightness value.

use image::Rgb;

use crate::Grid;

/// Unweighted channel mean, truncated: `floor((R + G + B) / 3)`.
pub fn intensity(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    // max sum is 765, so the quotient always fits back into a u8
    ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
}

/// Reduce every cell of a color grid to its intensity.
pub fn reduce(colors: &Grid<Rgb<u8>>) -> Grid<u8> {
    colors.map(|&rgb| intensity(rgb))
}
