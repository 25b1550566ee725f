//! Canvas state machine: tool settings, committed content, and the live selection.

use super::prompt::{PickSubscribers, TextPrompt};
use crate::config::{Config, MAX_CANVAS_DIMENSION};
use crate::draw::{
    Background, Color, Frame, History, Selection, Shape, Snapshot, WHITE, font, render_frame,
};
use crate::input::tool::{Mode, Pen};
use ab_glyph::FontArc;
use log::{debug, info, warn};

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: u32 = 800;
/// Default stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
/// Default font size for text shapes.
pub const DEFAULT_FONT_SIZE: f64 = 40.0;
/// Smallest stroke width or font size accepted by the setters.
pub const MIN_SIZE: f64 = 0.5;
/// Largest stroke width or font size accepted by the setters.
pub const MAX_SIZE: f64 = 100.0;
/// Eraser strokes are this many times wider than the active stroke width.
pub const ERASER_WIDTH_FACTOR: f64 = 5.0;

/// Current drawing state.
///
/// While `Drawing`, pointer drags keep reshaping the shape at `shape_index`. The handle is
/// only honored while that shape is still on top of the frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for a pointer press
    Idle,
    /// Pointer held after creating a shape
    Drawing {
        /// Pen that created the shape (freehand while erasing)
        pen: Pen,
        /// Where the pointer was pressed
        anchor_x: f64,
        anchor_y: f64,
        /// Position of the in-progress shape in the frame
        shape_index: usize,
    },
}

/// The canvas interaction engine.
///
/// Holds the frame (background plus committed shapes), the redo history, the tool settings,
/// and the live selection. Pointer events (see the `mouse` handlers) mutate it according to
/// the active [`Mode`] and [`Pen`]; accessors expose what a presentation layer polls.
pub struct CanvasState {
    pub(crate) frame: Frame,
    pub(crate) history: History,
    /// Current drawing state machine
    pub state: DrawingState,
    pub(crate) selection: Option<Selection>,
    width: u32,
    height: u32,
    stroke_color: Color,
    stroke_width: f64,
    font_size: f64,
    pen: Pen,
    mode: Mode,
    /// Text obtained from the prompt, waiting for the click that places it
    pub(crate) pending_text: Option<String>,
    pub(crate) dirty: bool,
    pub(crate) font: Option<FontArc>,
    pub(crate) text_prompt: Option<Box<dyn TextPrompt>>,
    pub(crate) pick_subscribers: PickSubscribers,
}

impl std::fmt::Debug for CanvasState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasState")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("mode", &self.mode)
            .field("pen", &self.pen)
            .field("shapes", &self.frame.shapes.len())
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl CanvasState {
    /// Creates a white canvas with built-in defaults: red, width 1, font size 40, line pen,
    /// select mode. The text font is looked up in the system font directories.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_font(width, height, font::load_font(None))
    }

    /// Creates a canvas with built-in defaults and an explicit text font.
    pub fn with_font(width: u32, height: u32, font: Option<FontArc>) -> Self {
        let (width, height) = sanitize_dimensions(width, height);
        Self {
            frame: Frame::new(Background::Solid(WHITE)),
            history: History::new(),
            state: DrawingState::Idle,
            selection: None,
            width,
            height,
            stroke_color: crate::draw::RED,
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
            pen: Pen::Line,
            mode: Mode::Select,
            pending_text: None,
            dirty: false,
            font,
            text_prompt: None,
            pick_subscribers: PickSubscribers::default(),
        }
    }

    /// Creates a canvas from configuration defaults.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        let font = font::load_font(drawing.font_path.as_deref());
        let mut state = Self::with_font(config.canvas.width, config.canvas.height, font);
        state.frame = Frame::new(Background::Solid(config.canvas.background.to_color()));
        state.stroke_color = drawing.default_color.to_color();
        state.set_stroke_width(drawing.default_stroke_width);
        state.set_font_size(drawing.default_font_size);
        state.pen = drawing.default_pen;
        state.mode = drawing.default_mode;
        state
    }

    // ------------------------------------------------------------------
    // Tool settings
    // ------------------------------------------------------------------

    /// Sets the color used for future drawings. Does not affect the eraser.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    /// Sets the stroke width for future drawings, clamped to 0.5-100.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = clamp_size("stroke width", width, self.stroke_width);
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Sets the font size for future text, clamped to 0.5-100.
    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = clamp_size("font size", size, self.font_size);
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn set_pen(&mut self, pen: Pen) {
        debug!("Pen set to {pen}");
        self.pen = pen;
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Changes the interaction mode.
    ///
    /// Leaving select mode flattens a captured selection into the frame (or discards one with
    /// no content) and hides the overlay.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("Mode set to {mode}");
        self.state = DrawingState::Idle;
        self.mode = mode;
        if mode != Mode::Select {
            self.flatten_selection();
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Text waiting to be placed by the next draw-mode click, if any.
    pub fn pending_text(&self) -> Option<&str> {
        self.pending_text.as_deref()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Clears the canvas to a white background of the given size.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.reset_with_background(width, height, Background::Solid(WHITE));
    }

    /// Clears the canvas to the given background and size.
    ///
    /// Drops every shape, the redo history, and any selection; the canvas becomes clean.
    /// Each side is clamped to 1-16384 pixels.
    pub fn reset_with_background(&mut self, width: u32, height: u32, background: Background) {
        let (width, height) = sanitize_dimensions(width, height);
        info!("Resetting canvas to {width}x{height}");
        self.width = width;
        self.height = height;
        self.frame.reset(background);
        self.history.clear();
        self.selection = None;
        self.state = DrawingState::Idle;
        self.dirty = false;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when there are unsaved modifications.
    pub fn has_changed(&self) -> bool {
        self.dirty
    }

    /// The committed content.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The live selection, if one exists.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    // ------------------------------------------------------------------
    // Commit / render helpers
    // ------------------------------------------------------------------

    /// Appends a shape as a new action: redo is invalidated and the canvas becomes dirty.
    pub(crate) fn commit(&mut self, shape: Shape) {
        debug!("Committing {} shape", shape.kind());
        self.history.commit(&mut self.frame, shape);
        self.dirty = true;
    }

    /// Turns a captured selection into a patch shape and removes the overlay.
    pub(crate) fn flatten_selection(&mut self) {
        if let Some(selection) = self.selection.take()
            && let Some(patch) = selection.into_patch()
        {
            self.commit(patch);
        }
    }

    /// Renders what is visible, including the selection overlay.
    pub fn render(&self) -> Option<Snapshot> {
        render_frame(
            &self.frame,
            self.width,
            self.height,
            self.font.as_ref(),
            self.selection.as_ref(),
        )
    }

    /// Renders committed content only.
    pub(crate) fn render_content(&self) -> Option<Snapshot> {
        render_frame(
            &self.frame,
            self.width,
            self.height,
            self.font.as_ref(),
            None,
        )
    }
}

fn clamp_size(what: &str, value: f64, current: f64) -> f64 {
    if value.is_nan() {
        warn!("Ignoring invalid {what}");
        return current;
    }
    if !(MIN_SIZE..=MAX_SIZE).contains(&value) {
        warn!("Invalid {what} {value:.1}, clamping to {MIN_SIZE}-{MAX_SIZE} range");
    }
    value.clamp(MIN_SIZE, MAX_SIZE)
}

fn sanitize_dimensions(width: u32, height: u32) -> (u32, u32) {
    let valid = 1..=MAX_CANVAS_DIMENSION;
    if !valid.contains(&width) || !valid.contains(&height) {
        warn!(
            "Canvas size {width}x{height} out of range, clamping each side to 1-{MAX_CANVAS_DIMENSION}"
        );
    }
    (
        width.clamp(1, MAX_CANVAS_DIMENSION),
        height.clamp(1, MAX_CANVAS_DIMENSION),
    )
}
