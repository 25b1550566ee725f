//! Data types for image load/save.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Raster formats the canvas can be opened from and saved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
}

impl FileFormat {
    /// All supported formats, in the order offered to file choosers.
    pub const ALL: [FileFormat; 4] = [
        FileFormat::Jpeg,
        FileFormat::Png,
        FileFormat::Gif,
        FileFormat::Bmp,
    ];

    /// Picks a format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(FileFormat::Jpeg),
            "png" => Some(FileFormat::Png),
            "gif" => Some(FileFormat::Gif),
            "bmp" => Some(FileFormat::Bmp),
            _ => None,
        }
    }

    /// File extensions accepted for this format.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileFormat::Jpeg => &["jpg", "jpeg"],
            FileFormat::Png => &["png"],
            FileFormat::Gif => &["gif"],
            FileFormat::Bmp => &["bmp"],
        }
    }

    /// Dotted extension list for messages, e.g. `.jpg, .jpeg, .png`.
    pub fn supported_extensions() -> String {
        Self::ALL
            .iter()
            .flat_map(|format| format.extensions())
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            FileFormat::Jpeg => image::ImageFormat::Jpeg,
            FileFormat::Png => image::ImageFormat::Png,
            FileFormat::Gif => image::ImageFormat::Gif,
            FileFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Errors that can occur while opening or saving canvas images.
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error(
        "Unsupported image format for {}: expected one of {}",
        .0.display(),
        FileFormat::supported_extensions()
    )]
    UnsupportedFormat(PathBuf),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("File operation failed: {0}")]
    Filesystem(#[from] std::io::Error),

    #[error("Canvas has no pixels to save")]
    EmptyCanvas,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(
            FileFormat::from_path(Path::new("a/b/photo.JPG")),
            Some(FileFormat::Jpeg)
        );
        assert_eq!(
            FileFormat::from_path(Path::new("shot.jpeg")),
            Some(FileFormat::Jpeg)
        );
        assert_eq!(
            FileFormat::from_path(Path::new("x.Png")),
            Some(FileFormat::Png)
        );
        assert_eq!(
            FileFormat::from_path(Path::new("x.bmp")),
            Some(FileFormat::Bmp)
        );
    }

    #[test]
    fn unknown_or_missing_extension_has_no_format() {
        assert_eq!(FileFormat::from_path(Path::new("notes.txt")), None);
        assert_eq!(FileFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn unsupported_format_message_lists_extensions() {
        let err = ImageIoError::UnsupportedFormat(PathBuf::from("out.tiff"));
        assert_eq!(
            err.to_string(),
            "Unsupported image format for out.tiff: expected one of .jpg, .jpeg, .png, .gif, .bmp"
        );
    }

    #[test]
    fn every_format_accepts_its_own_extensions() {
        for format in FileFormat::ALL {
            for ext in format.extensions() {
                let path = PathBuf::from(format!("file.{ext}"));
                assert_eq!(FileFormat::from_path(&path), Some(format));
            }
        }
    }
}
