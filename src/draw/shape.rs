//! Shape definitions for canvas drawables.

use super::color::Color;
use super::geometry::{OrientedRect, Point};
use image::RgbaImage;
use std::sync::Arc;

/// Represents a drawable primitive on the canvas.
///
/// Each variant carries its own color and stroke width so shapes render independently of the
/// tool settings that were active when they were created.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Freehand stroke (also used by the eraser) - polyline through the dragged points
    Freehand {
        /// Points traced by the pointer; the first one is the move-to point
        points: Vec<Point>,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Straight line segment
    Line {
        /// Fixed starting point
        start: Point,
        /// End point following the pointer
        end: Point,
        /// Line color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Rectangle outline, optionally filled
    Rect {
        /// Anchor plus oriented extent
        rect: OrientedRect,
        /// Border color
        color: Color,
        /// Border thickness in pixels (0 = no outline)
        thick: f64,
        /// Interior fill
        fill: Option<Color>,
    },
    /// Square outline; geometry is an oriented rectangle kept at equal extents
    Square {
        rect: OrientedRect,
        color: Color,
        thick: f64,
    },
    /// Circle outline around a fixed center
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        thick: f64,
    },
    /// Text laid out from a baseline origin, filled and outlined in the same color
    Text {
        /// Baseline origin of the first glyph
        anchor: Point,
        /// Text content to display
        text: String,
        /// Fill and outline color
        color: Color,
        /// Font size in pixels
        size: f64,
    },
    /// Captured pixel region pasted back at its top-left corner
    Patch {
        x: f64,
        y: f64,
        image: Arc<RgbaImage>,
    },
}

/// Outline width used for text glyphs.
pub const TEXT_OUTLINE_WIDTH: f64 = 1.0;

impl Shape {
    /// Short lowercase name of the shape kind, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Freehand { .. } => "freehand",
            Shape::Line { .. } => "line",
            Shape::Rect { .. } => "rect",
            Shape::Square { .. } => "square",
            Shape::Circle { .. } => "circle",
            Shape::Text { .. } => "text",
            Shape::Patch { .. } => "patch",
        }
    }

    /// Returns true when rendering this shape would produce no pixels.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Freehand { points, .. } => points.len() < 2,
            Shape::Line { start, end, .. } => start == end,
            Shape::Rect { rect, .. } | Shape::Square { rect, .. } => rect.is_degenerate(),
            Shape::Circle { radius, .. } => *radius <= 0.0,
            Shape::Text { text, .. } => text.is_empty(),
            Shape::Patch { image, .. } => image.width() == 0 || image.height() == 0,
        }
    }
}

/// Base layer of a canvas: a solid color or a decoded image drawn at the origin.
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Solid(Color),
    Image(Arc<RgbaImage>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn single_point_freehand_is_degenerate() {
        let shape = Shape::Freehand {
            points: vec![Point::new(1.0, 1.0)],
            color: RED,
            thick: 2.0,
        };
        assert!(shape.is_degenerate());
    }

    #[test]
    fn zero_radius_circle_is_degenerate() {
        let shape = Shape::Circle {
            center: Point::new(4.0, 4.0),
            radius: 0.0,
            color: BLACK,
            thick: 1.0,
        };
        assert!(shape.is_degenerate());
        assert_eq!(shape.kind(), "circle");
    }

    #[test]
    fn dragged_rect_is_not_degenerate() {
        let shape = Shape::Rect {
            rect: OrientedRect::new(0.0, 0.0, -3.0, 4.0),
            color: RED,
            thick: 1.0,
            fill: None,
        };
        assert!(!shape.is_degenerate());
    }
}
