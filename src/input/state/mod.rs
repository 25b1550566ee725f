mod core;
mod file;
mod history;
mod mouse;
mod prompt;
mod select;

pub use core::{
    CanvasState, DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_STROKE_WIDTH, DEFAULT_WIDTH,
    DrawingState, ERASER_WIDTH_FACTOR, MAX_SIZE, MIN_SIZE,
};
pub use prompt::{PickSubscription, TextPrompt};
