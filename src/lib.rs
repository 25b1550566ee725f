//! Canvas interaction engine.
//!
//! [`input::CanvasState`] turns pointer events and tool settings into committed drawables,
//! rectangular selections, and color picks, with undo/redo over the drawable list. Rendering
//! and snapshots live in [`draw`], raster load/save in [`io`], and the unsaved-changes guard
//! around new/open/save in [`session`]. The `easel` binary replays a [`script`] against a
//! canvas headlessly.

pub mod config;
pub mod draw;
pub mod input;
pub mod io;
pub mod script;
pub mod session;
pub mod util;

pub use config::Config;
