use crate::config::Config;
use crate::draw::{Background, Color, WHITE};
use crate::input::CanvasState;
use crate::input::state::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::io::ImageIoError;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Answer to the "save changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDecision {
    /// Save first, then continue if saving succeeded
    Yes,
    /// Discard changes and continue
    No,
    /// Abort the pending action
    Cancel,
}

/// Blocking dialogs a front end provides to the document.
pub trait Dialogs {
    /// Asks whether unsaved changes should be saved before they are discarded.
    fn confirm_save(&mut self) -> SaveDecision;

    /// Asks where to save. `None` means the chooser was cancelled.
    fn choose_save_path(&mut self) -> Option<PathBuf>;
}

/// A canvas together with its file.
pub struct Document {
    canvas: CanvasState,
    path: Option<PathBuf>,
    new_width: u32,
    new_height: u32,
    new_background: Color,
}

impl Document {
    /// Wraps an untitled canvas. New images get the canvas's current size on a white
    /// background.
    pub fn new(canvas: CanvasState) -> Self {
        Self {
            new_width: canvas.width(),
            new_height: canvas.height(),
            new_background: WHITE,
            canvas,
            path: None,
        }
    }

    /// Creates an untitled document whose canvas and new images follow the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            canvas: CanvasState::from_config(config),
            path: None,
            new_width: config.canvas.width,
            new_height: config.canvas.height,
            new_background: config.canvas.background.to_color(),
        }
    }

    pub fn canvas(&self) -> &CanvasState {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasState {
        &mut self.canvas
    }

    /// File the document was opened from or last saved to; `None` while untitled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Window-title style name: the file name (or "Untitled"), starred when modified.
    pub fn title(&self) -> String {
        let name = self
            .path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        if self.canvas.has_changed() {
            format!("{name}*")
        } else {
            name
        }
    }

    /// Guard run before discarding the canvas (new, open, quit).
    ///
    /// Returns `Ok(true)` when the caller may proceed: the canvas is clean, the user declined
    /// to save, or saving succeeded. `Ok(false)` means the user cancelled, either at the prompt
    /// or in the save chooser. Save failures are returned as errors and also abort.
    pub fn confirm_discard(&mut self, dialogs: &mut dyn Dialogs) -> Result<bool, ImageIoError> {
        if !self.canvas.has_changed() {
            return Ok(true);
        }
        match dialogs.confirm_save() {
            SaveDecision::Yes => self.save(dialogs),
            SaveDecision::No => Ok(true),
            SaveDecision::Cancel => {
                debug!("Discard cancelled");
                Ok(false)
            }
        }
    }

    /// Replaces the canvas with a blank image of the configured size and forgets the path.
    pub fn new_image(&mut self, dialogs: &mut dyn Dialogs) -> Result<bool, ImageIoError> {
        if !self.confirm_discard(dialogs)? {
            return Ok(false);
        }
        self.canvas.reset_with_background(
            self.new_width,
            self.new_height,
            Background::Solid(self.new_background),
        );
        self.path = None;
        info!("New {}x{} image", self.new_width, self.new_height);
        Ok(true)
    }

    /// Opens `path` after the save guard. On a decode failure the current canvas and path stay.
    pub fn open(&mut self, path: &Path, dialogs: &mut dyn Dialogs) -> Result<bool, ImageIoError> {
        if !self.confirm_discard(dialogs)? {
            return Ok(false);
        }
        self.canvas.open_image_from_file(path)?;
        self.path = Some(path.to_path_buf());
        Ok(true)
    }

    /// Saves to the current file, or asks for one when the document is untitled.
    pub fn save(&mut self, dialogs: &mut dyn Dialogs) -> Result<bool, ImageIoError> {
        match self.path.clone() {
            Some(path) => {
                self.canvas.save_image_as(&path)?;
                Ok(true)
            }
            None => self.save_as(dialogs),
        }
    }

    /// Asks for a destination, saves there, and makes it the current file.
    pub fn save_as(&mut self, dialogs: &mut dyn Dialogs) -> Result<bool, ImageIoError> {
        let Some(path) = dialogs.choose_save_path() else {
            debug!("Save chooser cancelled");
            return Ok(false);
        };
        self.canvas.save_image_as(&path)?;
        self.path = Some(path);
        Ok(true)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(CanvasState::new(DEFAULT_WIDTH, DEFAULT_HEIGHT))
    }
}
