//! Paint model shared between views and canvases.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - the linear gradient shader and its geometry resolver
//! - fill vs stroke paint state
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod mode;

pub use color::Color;
pub use gradient::{
    angle_direction, resolve_axis, resolve_gradient, ColorStop, GradientSpec, LinearGradient,
    SpecIssue, SpreadMode,
};
pub use mode::{select_paint_mode, PaintMode, PaintState};
