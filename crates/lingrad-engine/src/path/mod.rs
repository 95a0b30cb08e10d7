//! Vector paths built for clipping and stroking.
//!
//! Paths are plain command lists in device pixels. Canvases translate them to
//! their own path type when drawing.

mod rounded_rect;
mod shape;

pub use rounded_rect::rounded_rect_path;
pub use shape::{build_shape_path, shape_bounds, ShapeSpec};

use crate::coords::{Rect, Vec2};

/// A single path command.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    CubicTo { c1: Vec2, c2: Vec2, to: Vec2 },
    Close,
}

/// Closed vector path plus the rectangle it was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    cmds: Vec<PathCmd>,
    bounds: Rect,
}

impl Path {
    #[inline]
    pub fn new(cmds: Vec<PathCmd>, bounds: Rect) -> Self {
        Self { cmds, bounds }
    }

    /// Path with no commands. Drawing it paints nothing.
    #[inline]
    pub fn empty(bounds: Rect) -> Self {
        Self { cmds: Vec::new(), bounds }
    }

    #[inline]
    pub fn cmds(&self) -> &[PathCmd] {
        &self.cmds
    }

    /// Bounding rect; every point and control point lies inside it.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Signed area of the on-curve polygon (control points ignored).
    ///
    /// Positive means clockwise on screen (+Y down).
    pub fn signed_area(&self) -> f32 {
        let points: Vec<Vec2> = self
            .cmds
            .iter()
            .filter_map(|c| match *c {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => Some(p),
                PathCmd::CubicTo { to, .. } => Some(to),
                PathCmd::Close => None,
            })
            .collect();

        let n = points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f32 = (0..n)
            .map(|i| {
                let a = points[i];
                let b = points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }
}
