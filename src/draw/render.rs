//! tiny-skia based rendering of frames, shapes, and the selection overlay.

use super::color::{BLACK, Color, TRANSPARENT};
use super::frame::Frame;
use super::geometry::{OrientedRect, Point};
use super::selection::Selection;
use super::shape::{Background, Shape, TEXT_OUTLINE_WIDTH};
use super::font;
use super::snapshot::{Snapshot, pixmap_from_image};
use ab_glyph::FontArc;
use image::RgbaImage;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    StrokeDash, Transform,
};

/// Renders a frame into a new snapshot.
///
/// `overlay` is drawn on top of every shape when given. Returns `None` if a `width`×`height`
/// surface cannot be allocated (zero or oversized dimensions).
pub fn render_frame(
    frame: &Frame,
    width: u32,
    height: u32,
    font: Option<&FontArc>,
    overlay: Option<&Selection>,
) -> Option<Snapshot> {
    let mut pixmap = Pixmap::new(width, height)?;
    render_background(&mut pixmap, &frame.background);
    render_shapes(&mut pixmap, &frame.shapes, font);
    if let Some(selection) = overlay {
        render_selection_overlay(&mut pixmap, selection);
    }
    Some(Snapshot::from_pixmap(pixmap))
}

/// Fills the pixmap with the background color or draws the background image at the origin.
pub fn render_background(pixmap: &mut Pixmap, background: &Background) {
    match background {
        Background::Solid(color) => pixmap.fill(color.to_skia()),
        Background::Image(image) => {
            pixmap.fill(TRANSPARENT.to_skia());
            render_image(pixmap, 0.0, 0.0, image);
        }
    }
}

/// Renders shapes in order (first shape = bottom layer).
pub fn render_shapes(pixmap: &mut Pixmap, shapes: &[Shape], font: Option<&FontArc>) {
    for shape in shapes {
        render_shape(pixmap, shape, font);
    }
}

/// Renders a single shape. Degenerate shapes draw nothing.
pub fn render_shape(pixmap: &mut Pixmap, shape: &Shape, font: Option<&FontArc>) {
    if shape.is_degenerate() {
        return;
    }
    match shape {
        Shape::Freehand {
            points,
            color,
            thick,
        } => render_freehand(pixmap, points, *color, *thick),
        Shape::Line {
            start,
            end,
            color,
            thick,
        } => render_line(pixmap, *start, *end, *color, *thick),
        Shape::Rect {
            rect,
            color,
            thick,
            fill,
        } => render_rect(pixmap, rect, *color, *thick, *fill),
        Shape::Square { rect, color, thick } => render_rect(pixmap, rect, *color, *thick, None),
        Shape::Circle {
            center,
            radius,
            color,
            thick,
        } => render_circle(pixmap, *center, *radius, *color, *thick),
        Shape::Text {
            anchor,
            text,
            color,
            size,
        } => {
            if let Some(font) = font {
                render_text(pixmap, font, *anchor, text, *color, *size);
            }
        }
        Shape::Patch { x, y, image } => render_image(pixmap, *x, *y, image),
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn stroke_for(thick: f64) -> Stroke {
    Stroke {
        width: thick as f32,
        ..Stroke::default()
    }
}

/// Renders a freehand polyline with round caps and joins.
fn render_freehand(pixmap: &mut Pixmap, points: &[Point], color: Color, thick: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    let mut builder = PathBuilder::new();
    builder.move_to(first.x as f32, first.y as f32);
    for p in rest {
        builder.line_to(p.x as f32, p.y as f32);
    }
    let Some(path) = builder.finish() else {
        return;
    };

    let stroke = Stroke {
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..stroke_for(thick)
    };
    pixmap.stroke_path(
        &path,
        &paint_for(color),
        &stroke,
        Transform::identity(),
        None,
    );
}

fn render_line(pixmap: &mut Pixmap, start: Point, end: Point, color: Color, thick: f64) {
    let mut builder = PathBuilder::new();
    builder.move_to(start.x as f32, start.y as f32);
    builder.line_to(end.x as f32, end.y as f32);
    let Some(path) = builder.finish() else {
        return;
    };
    let stroke = Stroke {
        line_cap: LineCap::Square,
        ..stroke_for(thick)
    };
    pixmap.stroke_path(
        &path,
        &paint_for(color),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Renders a rectangle at its normalized corner; a zero thickness skips the outline.
fn render_rect(
    pixmap: &mut Pixmap,
    rect: &OrientedRect,
    color: Color,
    thick: f64,
    fill: Option<Color>,
) {
    let Some(bounds) = Rect::from_xywh(
        rect.abs_x() as f32,
        rect.abs_y() as f32,
        rect.width() as f32,
        rect.height() as f32,
    ) else {
        return;
    };
    let path = PathBuilder::from_rect(bounds);

    if let Some(fill) = fill {
        pixmap.fill_path(
            &path,
            &paint_for(fill),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
    if thick > 0.0 {
        pixmap.stroke_path(
            &path,
            &paint_for(color),
            &stroke_for(thick),
            Transform::identity(),
            None,
        );
    }
}

fn render_circle(pixmap: &mut Pixmap, center: Point, radius: f64, color: Color, thick: f64) {
    let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
    else {
        return;
    };
    pixmap.stroke_path(
        &path,
        &paint_for(color),
        &stroke_for(thick),
        Transform::identity(),
        None,
    );
}

/// Renders text from its baseline origin, glyphs filled and outlined in `color`.
pub fn render_text(
    pixmap: &mut Pixmap,
    font: &FontArc,
    anchor: Point,
    text: &str,
    color: Color,
    size: f64,
) {
    let Some(path) = font::text_path(font, text, anchor, size) else {
        return;
    };
    let paint = paint_for(color);
    pixmap.fill_path(
        &path,
        &paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    pixmap.stroke_path(
        &path,
        &paint,
        &stroke_for(TEXT_OUTLINE_WIDTH),
        Transform::identity(),
        None,
    );
}

/// Copies an image with its top-left at `(x, y)`, rounded to whole pixels.
fn render_image(pixmap: &mut Pixmap, x: f64, y: f64, image: &RgbaImage) {
    let Some(source) = pixmap_from_image(image) else {
        return;
    };
    pixmap.draw_pixmap(
        x.round() as i32,
        y.round() as i32,
        source.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );
}

/// Draws a live selection: its captured content plus a 1px black dashed outline.
pub fn render_selection_overlay(pixmap: &mut Pixmap, selection: &Selection) {
    if !selection.is_visible() {
        return;
    }
    if let Some(content) = selection.content() {
        let origin = selection.content_origin();
        render_image(pixmap, origin.x, origin.y, content);
    }

    let rect = selection.rect();
    let Some(bounds) = Rect::from_xywh(
        (rect.abs_x() + 0.5) as f32,
        (rect.abs_y() + 0.5) as f32,
        (rect.width() - 1.0).max(0.0) as f32,
        (rect.height() - 1.0).max(0.0) as f32,
    ) else {
        return;
    };
    let path = PathBuilder::from_rect(bounds);
    let mut paint = paint_for(BLACK);
    paint.anti_alias = false;
    let stroke = Stroke {
        width: 1.0,
        dash: StrokeDash::new(vec![2.0, 2.0], 0.0),
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED, WHITE};
    use crate::draw::shape::Background;

    fn blank() -> Frame {
        Frame::new(Background::Solid(WHITE))
    }

    #[test]
    fn solid_background_fills_every_pixel() {
        let snapshot = render_frame(&blank(), 8, 8, None, None).unwrap();
        assert_eq!(snapshot.pixel(0, 0), Some(WHITE));
        assert_eq!(snapshot.pixel(7, 7), Some(WHITE));
    }

    #[test]
    fn zero_sized_surface_is_none() {
        assert!(render_frame(&blank(), 0, 10, None, None).is_none());
    }

    #[test]
    fn thick_line_covers_its_midpoint() {
        let mut frame = blank();
        frame.add_shape(Shape::Line {
            start: Point::new(2.0, 10.0),
            end: Point::new(18.0, 10.0),
            color: RED,
            thick: 4.0,
        });
        let snapshot = render_frame(&frame, 20, 20, None, None).unwrap();
        assert_eq!(snapshot.pixel(10, 10), Some(RED));
        assert_eq!(snapshot.pixel(10, 2), Some(WHITE));
    }

    #[test]
    fn filled_rect_without_outline_covers_interior() {
        let mut frame = blank();
        frame.add_shape(Shape::Rect {
            rect: OrientedRect::new(15.0, 15.0, -10.0, -10.0),
            color: BLUE,
            thick: 0.0,
            fill: Some(BLUE),
        });
        let snapshot = render_frame(&frame, 20, 20, None, None).unwrap();
        assert_eq!(snapshot.pixel(10, 10), Some(BLUE));
        assert_eq!(snapshot.pixel(2, 2), Some(WHITE));
    }

    #[test]
    fn degenerate_shapes_draw_nothing() {
        let mut frame = blank();
        frame.add_shape(Shape::Circle {
            center: Point::new(5.0, 5.0),
            radius: 0.0,
            color: RED,
            thick: 6.0,
        });
        frame.add_shape(Shape::Freehand {
            points: vec![Point::new(5.0, 5.0)],
            color: RED,
            thick: 6.0,
        });
        let snapshot = render_frame(&frame, 10, 10, None, None).unwrap();
        assert_eq!(snapshot.pixel(5, 5), Some(WHITE));
    }

    #[test]
    fn patch_lands_at_rounded_corner() {
        let mut frame = blank();
        let image = RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 255, 255]));
        frame.add_shape(Shape::Patch {
            x: 3.0,
            y: 4.0,
            image: std::sync::Arc::new(image),
        });
        let snapshot = render_frame(&frame, 10, 10, None, None).unwrap();
        assert_eq!(snapshot.pixel(3, 4), Some(BLUE));
        assert_eq!(snapshot.pixel(4, 5), Some(BLUE));
        assert_eq!(snapshot.pixel(5, 4), Some(WHITE));
    }

    #[test]
    fn overlay_outline_is_black_and_hard_edged() {
        let frame = blank();
        let mut selection = Selection::new(Point::new(2.0, 2.0));
        selection.resize_to(Point::new(12.0, 12.0));
        let snapshot = render_frame(&frame, 20, 20, None, Some(&selection)).unwrap();
        assert_eq!(snapshot.pixel(3, 2), Some(BLACK));
        let without = render_frame(&frame, 20, 20, None, None).unwrap();
        assert_eq!(without.pixel(3, 2), Some(WHITE));
    }
}
