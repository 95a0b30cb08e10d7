//! Coordinate and geometry types shared by the resolver, path builder and views.
//!
//! Two spaces are in play:
//! - fractional: the unit square `[0, 1] x [0, 1]` over the view bounds
//! - device pixels: origin top-left, +X right, +Y down
//!
//! Both use [`Vec2`]; conversion is a component-wise multiply by [`PixelSize`].

mod corner_radii;
mod rect;
mod size;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use size::PixelSize;
pub use vec2::Vec2;
