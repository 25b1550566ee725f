//! Geometry primitives shared by shapes and the selection region.

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Rectangle that accepts negative width and height.
///
/// The anchor stays where the drag started. A negative relative width or height is stored
/// as a positive extent plus an offset, so `abs_x()`/`abs_y()` always report the true
/// top-left corner while `width()`/`height()` stay non-negative. Dragging from the anchor
/// into any of the four quadrants yields the same kind of rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientedRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    offset_x: f64,
    offset_y: f64,
}

impl OrientedRect {
    /// Creates a zero-extent rectangle anchored at `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Creates a rectangle from an anchor and a signed extent.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut rect = Self::at(x, y);
        rect.set_relative_width(width);
        rect.set_relative_height(height);
        rect
    }

    /// Sets the width; a negative value extends the rectangle left of the anchor.
    pub fn set_relative_width(&mut self, w: f64) {
        if w >= 0.0 {
            self.width = w;
            self.offset_x = 0.0;
        } else {
            self.width = -w;
            self.offset_x = w;
        }
    }

    /// Sets the height; a negative value extends the rectangle above the anchor.
    pub fn set_relative_height(&mut self, h: f64) {
        if h >= 0.0 {
            self.height = h;
            self.offset_y = 0.0;
        } else {
            self.height = -h;
            self.offset_y = h;
        }
    }

    /// Anchor X (where the drag started).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Anchor Y (where the drag started).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Moves the anchor, keeping extent and orientation.
    pub fn set_anchor(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// X coordinate of the top-left corner.
    pub fn abs_x(&self) -> f64 {
        self.x + self.offset_x
    }

    /// Y coordinate of the top-left corner.
    pub fn abs_y(&self) -> f64 {
        self.y + self.offset_y
    }

    /// Absolute (non-negative) width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Absolute (non-negative) height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Tests whether a point lies inside the normalized bounds (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let left = self.abs_x();
        let top = self.abs_y();
        x >= left && x <= left + self.width && y >= top && y <= top + self.height
    }
}
