use crate::coords::{CornerRadii, Rect, Vec2};

use super::{Path, PathCmd};

/// Cubic Bézier handle length for a quarter ellipse: 4/3 * tan(π/8).
const KAPPA: f32 = 0.552_284_8;

/// Builds a clockwise rounded-rectangle path.
///
/// `rect` is normalized first; an empty rect yields an empty path. Radii are
/// fitted with [`CornerRadii::fitted_to`]. The contour starts at the end of the
/// top-left arc and runs top, right, bottom, left.
pub fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> Path {
    let rect = rect.normalized();
    if rect.is_empty() || !rect.is_finite() {
        return Path::empty(rect);
    }

    let r = radii.fitted_to(rect);
    let Vec2 { x: left, y: top } = rect.min();
    let Vec2 { x: right, y: bottom } = rect.max();

    let mut cmds = Vec::with_capacity(10);
    cmds.push(PathCmd::MoveTo(Vec2::new(left + r.top_left.x, top)));

    // top edge, top-right corner
    cmds.push(PathCmd::LineTo(Vec2::new(right - r.top_right.x, top)));
    push_corner(&mut cmds, Vec2::new(right, top), r.top_right, Vec2::new(-1.0, 0.0), Vec2::new(0.0, 1.0));

    // right edge, bottom-right corner
    cmds.push(PathCmd::LineTo(Vec2::new(right, bottom - r.bottom_right.y)));
    push_corner(&mut cmds, Vec2::new(right, bottom), r.bottom_right, Vec2::new(0.0, -1.0), Vec2::new(-1.0, 0.0));

    // bottom edge, bottom-left corner
    cmds.push(PathCmd::LineTo(Vec2::new(left + r.bottom_left.x, bottom)));
    push_corner(&mut cmds, Vec2::new(left, bottom), r.bottom_left, Vec2::new(1.0, 0.0), Vec2::new(0.0, -1.0));

    // left edge, top-left corner
    cmds.push(PathCmd::LineTo(Vec2::new(left, top + r.top_left.y)));
    push_corner(&mut cmds, Vec2::new(left, top), r.top_left, Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0));

    cmds.push(PathCmd::Close);
    Path::new(cmds, rect)
}

/// Emits the arc around `corner`.
///
/// `from` points from the corner back toward the arc start along the incoming
/// edge; `to` points from the corner toward the arc end along the outgoing
/// edge. Square corners emit nothing since the preceding line already ends on
/// the corner.
fn push_corner(cmds: &mut Vec<PathCmd>, corner: Vec2, radius: Vec2, from: Vec2, to: Vec2) {
    if radius.x <= 0.0 || radius.y <= 0.0 {
        return;
    }

    let reach = |dir: Vec2, scale: f32| corner + Vec2::new(dir.x * radius.x, dir.y * radius.y) * scale;

    let start = reach(from, 1.0);
    let end = reach(to, 1.0);
    cmds.push(PathCmd::CubicTo {
        c1: start - Vec2::new(from.x * radius.x, from.y * radius.y) * KAPPA,
        c2: end - Vec2::new(to.x * radius.x, to.y * radius.y) * KAPPA,
        to: end,
    });
}
