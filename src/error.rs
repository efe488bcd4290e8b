use std::path::PathBuf;

/// Errors produced while building a ramp or grid, or while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("glyph ramp must contain at least one character")]
    EmptyRamp,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no image at '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}
