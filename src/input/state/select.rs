use crate::draw::{Point, Selection};
use log::debug;

use super::CanvasState;

impl CanvasState {
    pub(super) fn select_press(&mut self, pointer: Point) {
        if let Some(selection) = self.selection.as_mut()
            && selection.is_captured()
            && selection.contains(pointer)
        {
            debug!("Grabbing selection at ({}, {})", pointer.x, pointer.y);
            selection.begin_move(pointer);
            return;
        }

        self.flatten_selection();
        self.selection = Some(Selection::new(pointer));
    }

    pub(super) fn select_drag(&mut self, pointer: Point) {
        let Some(selection) = self.selection.as_mut() else {
            return;
        };

        if selection.is_holding() {
            let hole = selection.move_to(pointer);
            if let Some(hole) = hole {
                self.commit(hole);
            }
            self.dirty = true;
        } else if !selection.is_captured() {
            selection.resize_to(pointer);
        }
    }

    pub(super) fn select_release(&mut self, _pointer: Point) {
        let needs_capture = match self.selection.as_mut() {
            Some(selection) if selection.is_holding() => {
                selection.release();
                false
            }
            Some(selection) => !selection.is_captured(),
            None => false,
        };
        if !needs_capture {
            return;
        }

        // Capture from committed content so the overlay outline is not picked up.
        let snapshot = self.render_content();
        if let (Some(selection), Some(snapshot)) = (self.selection.as_mut(), snapshot)
            && selection.capture(&snapshot)
        {
            let rect = selection.rect();
            debug!(
                "Captured selection {}x{} at ({}, {})",
                rect.width(),
                rect.height(),
                rect.abs_x(),
                rect.abs_y()
            );
        }
    }

    /// Reads the visible color under the pointer, makes it the stroke color, and notifies pick
    /// subscribers. Presses outside the canvas are ignored.
    pub(super) fn pick_color(&mut self, pointer: Point) {
        let Some(snapshot) = self.render() else {
            return;
        };
        let Some(color) = snapshot.pixel(pointer.x.floor() as i64, pointer.y.floor() as i64) else {
            debug!("Pick outside canvas at ({}, {})", pointer.x, pointer.y);
            return;
        };
        debug!("Picked color {:?}", color.to_rgba8());
        self.set_stroke_color(color);
        self.pick_subscribers.notify(color);
    }
}
