pub mod download;
pub mod unsplash;

use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::utils::error::{Result, WallsyError};

/// Confirm a file on disk is a real image by sniffing its content header.
/// Only the header is read; nothing is decoded.
pub fn validate_image(path: &Path) -> Result<ImageFormat> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;

    reader.format().ok_or_else(|| WallsyError::ProcessingError {
        message: format!("{} does not appear to be an image", path.display()),
    })
}
