//! Lingrad engine crate.
//!
//! Geometry and paint pieces behind a linear-gradient view: the gradient axis
//! resolver, rounded-rect shape paths, fill/stroke paint state, and the canvas
//! seam they are drawn through.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
pub mod render;
pub mod scene;
