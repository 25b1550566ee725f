//! Drawable model and rasterization.
//!
//! This module defines the core canvas types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: committed drawables (paths, shapes, text, pixel patches)
//! - [`Frame`]: background plus shapes in z-order, with [`History`] for undo/redo
//! - [`Selection`]: the movable pixel-backed selection region
//! - Rendering into a [`Snapshot`] via tiny-skia

pub mod color;
pub mod font;
pub mod frame;
pub mod geometry;
pub mod history;
pub mod render;
pub mod selection;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::Frame;
pub use geometry::{OrientedRect, Point};
pub use history::History;
pub use render::{render_frame, render_shape, render_shapes};
pub use selection::Selection;
pub use shape::{Background, Shape};
pub use snapshot::Snapshot;

// Re-export color constants for public API
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
