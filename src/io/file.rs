//! Decoding images from disk and encoding rendered canvases.

use super::types::{FileFormat, ImageIoError};
use image::{DynamicImage, ImageReader, RgbImage, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Decodes an image file into straight-alpha RGBA pixels.
///
/// The format is detected from the file contents, falling back to the extension.
pub fn load_image(path: &Path) -> Result<RgbaImage, ImageIoError> {
    let decode_error = |source| ImageIoError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let image = reader.decode().map_err(decode_error)?;
    log::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image.to_rgba8())
}

/// Encodes an opaque RGB image to `path`, choosing the format from the extension.
///
/// The image is encoded in memory first, so an unsupported extension or an encoder failure
/// never leaves a file behind.
pub fn save_image(image: RgbImage, path: &Path) -> Result<(), ImageIoError> {
    let format = FileFormat::from_path(path)
        .ok_or_else(|| ImageIoError::UnsupportedFormat(path.to_path_buf()))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(ImageIoError::EmptyCanvas);
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), format.to_image_format())
        .map_err(ImageIoError::Encode)?;

    fs::write(path, &bytes)?;
    log::info!(
        "Image saved to {} ({:?}, {} bytes)",
        path.display(),
        format,
        bytes.len()
    );
    Ok(())
}
