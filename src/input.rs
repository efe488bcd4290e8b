//! Locating, decoding and shrinking the source image.

use std::io;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageError};

use crate::{Error, Footprint};

/// Where image names are looked up when no directory is given.
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Join `name` onto `dir`. Absolute names replace the directory entirely.
pub fn resolve(dir: &Path, name: &Path) -> PathBuf {
    dir.join(name)
}

/// Decode the image at `path`, reporting a missing file as [`Error::NotFound`].
pub fn load(path: &Path) -> Result<DynamicImage, Error> {
    log::debug!("loading {}", path.display());
    match image::open(path) {
        Ok(img) => Ok(img),
        Err(ImageError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => Err(Error::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Shrink `img` to fit `footprint`, or return it untouched if it already does.
pub fn downscale(img: DynamicImage, footprint: Footprint) -> DynamicImage {
    let (width, height) = img.dimensions();
    let (target_w, target_h) = footprint.fit(width, height);
    if (target_w, target_h) == (width, height) {
        return img;
    }
    log::debug!(
        "resizing {}x{} to {}x{}",
        width,
        height,
        target_w,
        target_h
    );
    img.resize_exact(target_w, target_h, FilterType::Lanczos3)
}
