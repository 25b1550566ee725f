//! Linear undo/redo history over a frame's shape list.

use super::frame::Frame;
use super::shape::Shape;

/// Redo candidates for a [`Frame`].
///
/// Undo moves the top shape of the frame onto the redo stack; redo appends it back on top of
/// whatever the frame holds now. Any new commit drops the redo stack.
#[derive(Debug, Default, Clone)]
pub struct History {
    undone: Vec<Shape>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new shape and invalidates redo.
    pub fn commit(&mut self, frame: &mut Frame, shape: Shape) {
        self.undone.clear();
        frame.add_shape(shape);
    }

    /// Moves the most recent shape to the redo stack. Returns false if only the background
    /// remains.
    pub fn undo(&mut self, frame: &mut Frame) -> bool {
        match frame.undo() {
            Some(shape) => {
                self.undone.push(shape);
                true
            }
            None => false,
        }
    }

    /// Re-appends the most recently undone shape at the top of the z-order.
    pub fn redo(&mut self, frame: &mut Frame) -> bool {
        match self.undone.pop() {
            Some(shape) => {
                frame.add_shape(shape);
                true
            }
            None => false,
        }
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn clear(&mut self) {
        self.undone.clear();
    }
}
