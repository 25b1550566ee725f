//! Rectangular pixel selection that can be captured and dragged around.

use super::color::WHITE;
use super::geometry::{OrientedRect, Point};
use super::shape::Shape;
use super::snapshot::Snapshot;
use image::RgbaImage;
use std::sync::Arc;

/// Width of the outline border excluded from captured content.
pub const SELECTION_BORDER: f64 = 1.0;

/// A live selection region.
///
/// Created with zero extent at the pointer, grown by dragging, and captured once on the first
/// release with a usable interior. A captured selection can be moved; its content is drawn at
/// the interior corner (`abs + 1`) until it is flattened back into the frame as a patch.
#[derive(Debug, Clone)]
pub struct Selection {
    rect: OrientedRect,
    content: Option<Arc<RgbaImage>>,
    moved: bool,
    holding: bool,
    grab_offset: Point,
}

impl Selection {
    /// Starts a new selection at `origin` with zero extent.
    pub fn new(origin: Point) -> Self {
        Self {
            rect: OrientedRect::at(origin.x, origin.y),
            content: None,
            moved: false,
            holding: false,
            grab_offset: Point::default(),
        }
    }

    pub fn rect(&self) -> &OrientedRect {
        &self.rect
    }

    /// Content captured on the first release, if any.
    pub fn content(&self) -> Option<&Arc<RgbaImage>> {
        self.content.as_ref()
    }

    pub fn is_captured(&self) -> bool {
        self.content.is_some()
    }

    /// True once the captured content has been dragged away from where it was taken.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// True while the pointer is dragging the captured content.
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// The overlay is shown once either dimension is non-zero.
    pub fn is_visible(&self) -> bool {
        self.rect.width() > 0.0 || self.rect.height() > 0.0
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point.x, point.y)
    }

    /// Grows the region from its anchor toward `pointer`.
    pub fn resize_to(&mut self, pointer: Point) {
        self.rect.set_relative_width(pointer.x - self.rect.x());
        self.rect.set_relative_height(pointer.y - self.rect.y());
    }

    /// Whole-pixel top-left corner of the content area, inside the border.
    ///
    /// Capture crops from this corner and the overlay and patch are drawn at it, so content
    /// that has not moved lands exactly on the pixels it came from.
    pub fn content_origin(&self) -> Point {
        Point::new(
            self.rect.abs_x().floor() + SELECTION_BORDER,
            self.rect.abs_y().floor() + SELECTION_BORDER,
        )
    }

    /// Interior pixel region as `(x, y, w, h)`, or `None` when it has no area.
    pub fn interior(&self) -> Option<(i64, i64, u32, u32)> {
        let origin = self.content_origin();
        let w = (self.rect.width() - 2.0 * SELECTION_BORDER).floor();
        let h = (self.rect.height() - 2.0 * SELECTION_BORDER).floor();
        if w < 1.0 || h < 1.0 {
            return None;
        }
        Some((origin.x as i64, origin.y as i64, w as u32, h as u32))
    }

    /// Captures the interior from a render that excludes this overlay.
    ///
    /// Only the first call with a usable interior captures; later calls return false.
    pub fn capture(&mut self, snapshot: &Snapshot) -> bool {
        if self.content.is_some() {
            return false;
        }
        let Some((x, y, w, h)) = self.interior() else {
            return false;
        };
        match snapshot.crop(x, y, w, h) {
            Some(image) => {
                self.content = Some(Arc::new(image));
                true
            }
            None => false,
        }
    }

    /// Starts dragging the captured content, remembering where inside it was grabbed.
    pub fn begin_move(&mut self, pointer: Point) {
        self.grab_offset = Point::new(pointer.x - self.rect.x(), pointer.y - self.rect.y());
        self.holding = true;
    }

    /// Moves the anchor so the grab point follows the pointer.
    ///
    /// Returns the hole to commit when this is the first movement since capture.
    pub fn move_to(&mut self, pointer: Point) -> Option<Shape> {
        if !self.holding {
            return None;
        }
        let hole = (!self.moved).then(|| self.lift_hole());
        self.rect.set_anchor(
            pointer.x - self.grab_offset.x,
            pointer.y - self.grab_offset.y,
        );
        self.moved = true;
        hole
    }

    pub fn release(&mut self) {
        self.holding = false;
    }

    /// White fill covering the current bounds, left behind where the content was lifted.
    fn lift_hole(&self) -> Shape {
        Shape::Rect {
            rect: self.rect,
            color: WHITE,
            thick: 0.0,
            fill: Some(WHITE),
        }
    }

    /// Converts captured content into a patch shape at its current position.
    pub fn into_patch(self) -> Option<Shape> {
        let origin = self.content_origin();
        self.content.map(|image| Shape::Patch {
            x: origin.x,
            y: origin.y,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::snapshot::pixmap_from_image;
    use image::Rgba;

    fn gradient_snapshot() -> Snapshot {
        let image = RgbaImage::from_fn(20, 20, |x, y| Rgba([x as u8 * 10, y as u8 * 10, 0, 255]));
        Snapshot::from_pixmap(pixmap_from_image(&image).unwrap())
    }

    fn selection(x: f64, y: f64, w: f64, h: f64) -> Selection {
        let mut sel = Selection::new(Point::new(x, y));
        sel.resize_to(Point::new(x + w, y + h));
        sel
    }

    #[test]
    fn one_by_one_selection_never_captures() {
        let mut sel = selection(5.0, 5.0, 1.0, 1.0);
        assert!(sel.is_visible());
        assert!(!sel.capture(&gradient_snapshot()));
        assert!(sel.content().is_none());
    }

    #[test]
    fn five_by_five_selection_captures_interior() {
        let mut sel = selection(5.0, 5.0, 5.0, 5.0);
        assert!(sel.capture(&gradient_snapshot()));
        let content = sel.content().unwrap();
        assert_eq!(content.dimensions(), (3, 3));
        assert_eq!(content.get_pixel(0, 0).0, [60, 60, 0, 255]);
    }

    #[test]
    fn capture_happens_once() {
        let mut sel = selection(2.0, 2.0, 6.0, 6.0);
        assert!(sel.capture(&gradient_snapshot()));
        assert!(!sel.capture(&gradient_snapshot()));
    }

    #[test]
    fn selection_dragged_up_left_captures_from_true_corner() {
        let mut sel = selection(10.0, 10.0, -5.0, -5.0);
        assert_eq!(sel.interior(), Some((6, 6, 3, 3)));
        assert!(sel.capture(&gradient_snapshot()));
    }

    #[test]
    fn first_move_yields_hole_at_original_bounds() {
        let mut sel = selection(2.0, 2.0, 6.0, 6.0);
        sel.capture(&gradient_snapshot());
        sel.begin_move(Point::new(4.0, 4.0));

        let hole = sel.move_to(Point::new(14.0, 4.0)).unwrap();
        match hole {
            Shape::Rect { rect, fill, .. } => {
                assert_eq!((rect.abs_x(), rect.abs_y()), (2.0, 2.0));
                assert_eq!(fill, Some(WHITE));
            }
            other => panic!("unexpected hole shape {other:?}"),
        }
        assert!(sel.move_to(Point::new(15.0, 4.0)).is_none());
        assert!(sel.has_moved());
        assert_eq!(sel.content_origin(), Point::new(13.0, 3.0));
    }

    #[test]
    fn fractional_corner_pastes_where_it_was_captured() {
        let mut sel = selection(2.6, 2.6, 18.0, 18.0);
        assert!(sel.capture(&gradient_snapshot()));
        let (x, y, _, _) = sel.interior().unwrap();
        assert_eq!((x, y), (3, 3));
        match sel.into_patch() {
            Some(Shape::Patch { x, y, image }) => {
                assert_eq!((x, y), (3.0, 3.0));
                assert_eq!(image.get_pixel(0, 0).0, [30, 30, 0, 255]);
            }
            other => panic!("expected patch, got {other:?}"),
        }
    }

    #[test]
    fn move_without_grab_does_nothing() {
        let mut sel = selection(2.0, 2.0, 6.0, 6.0);
        sel.capture(&gradient_snapshot());
        assert!(sel.move_to(Point::new(9.0, 9.0)).is_none());
        assert_eq!(sel.rect().abs_x(), 2.0);
    }

    #[test]
    fn into_patch_requires_content() {
        assert!(selection(0.0, 0.0, 8.0, 8.0).into_patch().is_none());
        let mut sel = selection(0.0, 0.0, 8.0, 8.0);
        sel.capture(&gradient_snapshot());
        match sel.into_patch() {
            Some(Shape::Patch { x, y, image }) => {
                assert_eq!((x, y), (1.0, 1.0));
                assert_eq!(image.dimensions(), (6, 6));
            }
            other => panic!("expected patch, got {other:?}"),
        }
    }
}
