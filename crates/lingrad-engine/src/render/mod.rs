//! Drawing surfaces.
//!
//! [`Canvas`] is the seam between views and whatever rasterizes their output.
//! [`PixmapCanvas`] is the built-in CPU implementation on tiny-skia; hosts with
//! their own 2D API implement `Canvas` directly or replay a
//! [`DrawList`](crate::scene::DrawList).
//!
//! Convention: geometry is in device pixels (top-left origin, +Y down).

mod canvas;
mod pixmap;

pub use canvas::Canvas;
pub use pixmap::PixmapCanvas;
