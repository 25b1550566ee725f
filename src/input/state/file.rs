use super::{CanvasState, DrawingState};
use crate::draw::Background;
use crate::io::{self, FileFormat, ImageIoError};
use std::path::Path;
use std::sync::Arc;

impl CanvasState {
    /// Replaces the canvas with the image at `path`, sized to the image.
    ///
    /// The file is decoded before anything changes; on error the canvas is untouched.
    pub fn open_image_from_file(&mut self, path: &Path) -> Result<(), ImageIoError> {
        let image = io::load_image(path)?;
        let (width, height) = image.dimensions();
        self.reset_with_background(width, height, Background::Image(Arc::new(image)));
        log::info!("Opened {} ({}x{})", path.display(), width, height);
        Ok(())
    }

    /// Saves what is visible to `path`, in the format named by its extension.
    ///
    /// A live selection is flattened first so the file matches the screen without the outline.
    /// Alpha is dropped. The canvas becomes clean only when writing succeeds.
    pub fn save_image_as(&mut self, path: &Path) -> Result<(), ImageIoError> {
        if FileFormat::from_path(path).is_none() {
            return Err(ImageIoError::UnsupportedFormat(path.to_path_buf()));
        }
        self.state = DrawingState::Idle;
        self.flatten_selection();

        let snapshot = self.render_content().ok_or(ImageIoError::EmptyCanvas)?;
        io::save_image(snapshot.to_rgb_image(), path)?;
        self.dirty = false;
        Ok(())
    }
}
