use super::{CanvasState, DrawingState};
use crate::draw::Selection;

impl CanvasState {
    /// Removes the most recent shape, keeping it for [`redo`](Self::redo).
    ///
    /// A captured selection is flattened first, so the first undo takes back the pasted
    /// content. No-op when [`undo_available`](Self::undo_available) is false.
    pub fn undo(&mut self) {
        if !self.undo_available() {
            return;
        }
        self.state = DrawingState::Idle;
        self.flatten_selection();
        if self.history.undo(&mut self.frame) {
            log::debug!("Undo; {} entries remain", self.frame.len());
            self.dirty = true;
        }
    }

    /// Re-applies the most recently undone shape on top of the current content.
    ///
    /// No-op when [`redo_available`](Self::redo_available) is false. A captured selection is
    /// pasted back first without discarding the redo candidates.
    pub fn redo(&mut self) {
        if !self.redo_available() {
            return;
        }
        self.state = DrawingState::Idle;
        if let Some(patch) = self.selection.take().and_then(Selection::into_patch) {
            self.frame.add_shape(patch);
        }
        if self.history.redo(&mut self.frame) {
            log::debug!("Redo; {} entries now", self.frame.len());
            self.dirty = true;
        }
    }

    /// True when something besides the background is committed.
    pub fn undo_available(&self) -> bool {
        !self.frame.is_blank()
    }

    /// True when an undone shape is waiting to be redone.
    pub fn redo_available(&self) -> bool {
        self.history.can_redo()
    }
}
