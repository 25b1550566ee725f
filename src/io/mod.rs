//! Image file I/O for the canvas.
//!
//! Opening decodes any supported raster into RGBA pixels that become the canvas background;
//! saving encodes a rendered canvas as opaque RGB in the format named by the file extension.

pub mod file;
pub mod types;

pub use file::{load_image, save_image};
pub use types::{FileFormat, ImageIoError};
