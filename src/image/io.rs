//! Grayscale loading via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::OwnedImage;
use crate::util::{NccMatchError, NccMatchResult};
use std::path::Path;

/// Converts any decoded image to an owned 8-bit luma grid.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> NccMatchResult<OwnedImage<u8>> {
    let gray = img.to_luma8();
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    OwnedImage::new(gray.into_raw(), width, height)
}

/// Loads an image file and converts it to grayscale intensities.
pub fn load_gray_image<P: AsRef<Path>>(path: P) -> NccMatchResult<OwnedImage<u8>> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| NccMatchError::ImageIo {
        reason: format!("{}: {err}", path.display()),
    })?;
    owned_from_dynamic_image(&img)
}
