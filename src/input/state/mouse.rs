use crate::draw::{OrientedRect, Point, Shape, WHITE};
use crate::input::tool::{Mode, Pen};
use log::debug;

use super::core::ERASER_WIDTH_FACTOR;
use super::{CanvasState, DrawingState};

impl CanvasState {
    /// Processes a pointer press at canvas coordinates `(x, y)`.
    ///
    /// # Behavior
    /// - Select mode: grabs a captured selection under the pointer, or flattens the old one
    ///   and starts a new selection
    /// - Pick mode: takes the color under the pointer as the stroke color
    /// - Draw/erase mode: commits a new zero-size shape that following drags reshape. With the
    ///   text pen, a click without pending text only prompts for it.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        let pointer = Point::new(x, y);
        match self.mode() {
            Mode::Select => self.select_press(pointer),
            Mode::Pick => self.pick_color(pointer),
            Mode::Draw | Mode::Erase => self.begin_shape(pointer),
        }
    }

    /// Processes a pointer drag to `(x, y)` while the button is held.
    pub fn on_pointer_drag(&mut self, x: f64, y: f64) {
        let pointer = Point::new(x, y);
        match self.mode() {
            Mode::Select => self.select_drag(pointer),
            Mode::Pick => {}
            Mode::Draw | Mode::Erase => self.update_shape(pointer),
        }
    }

    /// Processes a pointer release at `(x, y)`.
    ///
    /// Shapes were committed on press, so drawing only returns to idle here. In select mode the
    /// first release of a usable selection captures its content.
    pub fn on_pointer_up(&mut self, x: f64, y: f64) {
        match self.mode() {
            Mode::Select => self.select_release(Point::new(x, y)),
            Mode::Pick => {}
            Mode::Draw | Mode::Erase => self.state = DrawingState::Idle,
        }
    }

    fn begin_shape(&mut self, pointer: Point) {
        self.state = DrawingState::Idle;
        let erasing = self.mode() == Mode::Erase;

        if !erasing && self.pen() == Pen::Text && self.pending_text.is_none() {
            match self.request_text() {
                Some(text) => {
                    debug!("Text pending placement: {text:?}");
                    self.pending_text = Some(text);
                }
                None => debug!("Text prompt cancelled"),
            }
            return;
        }

        let pen = if erasing { Pen::Freehand } else { self.pen() };
        let (color, thick) = if erasing {
            (WHITE, self.stroke_width() * ERASER_WIDTH_FACTOR)
        } else {
            (self.stroke_color(), self.stroke_width())
        };

        let shape = match pen {
            Pen::Freehand => Shape::Freehand {
                points: vec![pointer],
                color,
                thick,
            },
            Pen::Line => Shape::Line {
                start: pointer,
                end: pointer,
                color,
                thick,
            },
            Pen::Rect => Shape::Rect {
                rect: OrientedRect::at(pointer.x, pointer.y),
                color,
                thick,
                fill: None,
            },
            Pen::Square => Shape::Square {
                rect: OrientedRect::at(pointer.x, pointer.y),
                color,
                thick,
            },
            Pen::Circle => Shape::Circle {
                center: pointer,
                radius: 0.0,
                color,
                thick,
            },
            Pen::Text => {
                let Some(text) = self.pending_text.take() else {
                    return;
                };
                Shape::Text {
                    anchor: pointer,
                    text,
                    color,
                    size: self.font_size(),
                }
            }
        };

        self.commit(shape);
        self.state = DrawingState::Drawing {
            pen,
            anchor_x: pointer.x,
            anchor_y: pointer.y,
            shape_index: self.frame.shapes.len() - 1,
        };
    }

    fn update_shape(&mut self, pointer: Point) {
        let DrawingState::Drawing {
            pen,
            anchor_x,
            anchor_y,
            shape_index,
        } = self.state
        else {
            return;
        };
        let Some(shape) = self.frame.top_shape_mut(shape_index) else {
            debug!("In-progress shape {shape_index} is no longer on top; ending drag");
            self.state = DrawingState::Idle;
            return;
        };

        match (pen, shape) {
            (Pen::Freehand, Shape::Freehand { points, .. }) => points.push(pointer),
            (Pen::Line, Shape::Line { end, .. }) => *end = pointer,
            (Pen::Rect, Shape::Rect { rect, .. }) => {
                rect.set_relative_width(pointer.x - anchor_x);
                rect.set_relative_height(pointer.y - anchor_y);
            }
            (Pen::Square, Shape::Square { rect, .. }) => {
                let side = pointer.y - anchor_y;
                rect.set_relative_height(side);
                rect.set_relative_width(square_width(anchor_x, anchor_y, pointer, side));
            }
            (Pen::Circle, Shape::Circle { center, radius, .. }) => {
                *radius = center.distance_to(pointer);
            }
            (Pen::Text, Shape::Text { anchor, .. }) => *anchor = pointer,
            (pen, shape) => debug!(
                "Ignoring drag: {} pen does not match in-progress {} shape",
                pen,
                shape.kind()
            ),
        }
    }
}

/// Signed width for a square whose signed height is `side`.
///
/// When the pointer is down-right or up-left of the anchor the width takes the height's sign;
/// otherwise the opposite sign, so the square grows into the pointer's quadrant. On the
/// anchor's vertical axis the pointer counts as right of it.
pub(crate) fn square_width(anchor_x: f64, anchor_y: f64, pointer: Point, side: f64) -> f64 {
    let same_quadrant = (pointer.x >= anchor_x && pointer.y >= anchor_y)
        || (pointer.x < anchor_x && pointer.y < anchor_y);
    if same_quadrant { side } else { -side }
}
