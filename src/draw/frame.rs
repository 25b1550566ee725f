//! Frame container for the ordered drawable sequence.

use super::color::WHITE;
use super::shape::{Background, Shape};

/// The canvas content: a background that can never be removed plus the committed shapes.
///
/// Shapes are stored in draw order (first = bottom layer, last = top layer). The background
/// is held apart from the shape list so undo can never reach it.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Base layer drawn before any shape
    pub background: Background,
    /// Committed shapes in z-order
    pub shapes: Vec<Shape>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(Background::Solid(WHITE))
    }
}

impl Frame {
    /// Creates a frame holding only the given background.
    pub fn new(background: Background) -> Self {
        Self {
            background,
            shapes: Vec::new(),
        }
    }

    /// Removes all shapes and replaces the background.
    pub fn reset(&mut self, background: Background) {
        self.background = background;
        self.shapes.clear();
    }

    /// Adds a new shape on top of existing shapes.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes and returns the most recently added shape, if any.
    pub fn undo(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    /// Number of entries including the background.
    pub fn len(&self) -> usize {
        self.shapes.len() + 1
    }

    /// A frame is never empty; the background always counts.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when only the background remains.
    pub fn is_blank(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shape at `index` if it is still the top of the z-order.
    pub(crate) fn top_shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        if index + 1 != self.shapes.len() {
            return None;
        }
        self.shapes.get_mut(index)
    }
}
