//! Pointer handling and the tool/mode state machine.
//!
//! This module turns pointer presses, drags, and releases into canvas edits according to the
//! active [`Mode`] and [`Pen`], and owns the selection, undo/redo, and dirty-tracking rules.

pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use state::{CanvasState, DrawingState, PickSubscription, TextPrompt};
pub use tool::{Mode, Pen};
