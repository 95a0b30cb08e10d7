use crate::coords::{CornerRadii, PixelSize, Rect};

use super::{rounded_rect_path, Path};

/// Shape-affecting properties of a gradient view.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ShapeSpec {
    pub size: PixelSize,
    /// Device pixels.
    pub radii: CornerRadii,
    /// Device pixels; only used in stroke-only mode.
    pub stroke_width: i32,
    /// Stroke-only mode: trace the outline instead of filling.
    pub transparent: bool,
}

/// Rectangle the shape path is built on.
///
/// Stroke-only shapes are inset by `stroke_width - 2` on every side so the
/// stroke stays inside the view. The offset is kept exactly as hosts expect
/// it, including the negative inset for widths below 2.
pub fn shape_bounds(shape: &ShapeSpec) -> Rect {
    let full = shape.size.bounds();
    if shape.transparent {
        full.inset((shape.stroke_width - 2) as f32)
    } else {
        full
    }
}

/// Builds the clockwise rounded-rect path used for clipping the fill or
/// tracing the stroke.
pub fn build_shape_path(shape: &ShapeSpec) -> Path {
    rounded_rect_path(shape_bounds(shape), shape.radii)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    fn shape(transparent: bool, stroke_width: i32) -> ShapeSpec {
        ShapeSpec {
            size: PixelSize::new(100, 100),
            radii: CornerRadii::zero(),
            stroke_width,
            transparent,
        }
    }

    #[test]
    fn stroke_only_insets_by_width_minus_two() {
        let p = build_shape_path(&shape(true, 4));
        assert_eq!(p.bounds().min(), Vec2::new(2.0, 2.0));
        assert_eq!(p.bounds().max(), Vec2::new(98.0, 98.0));
    }

    #[test]
    fn fill_uses_full_bounds() {
        let p = build_shape_path(&shape(false, 4));
        assert_eq!(p.bounds(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn thin_stroke_grows_past_bounds() {
        assert_eq!(shape_bounds(&shape(true, 1)), Rect::new(-1.0, -1.0, 102.0, 102.0));
        assert_eq!(shape_bounds(&shape(true, 2)), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn huge_stroke_collapses_to_empty_path() {
        assert!(build_shape_path(&shape(true, 52)).is_empty());
    }

    #[test]
    fn radii_apply_to_inset_rect() {
        let spec = ShapeSpec { radii: CornerRadii::all(8.0), ..shape(true, 6) };
        let p = build_shape_path(&spec);
        assert_eq!(p.cmds()[0], crate::path::PathCmd::MoveTo(Vec2::new(12.0, 4.0)));
    }

    #[test]
    fn unsized_view_has_empty_path() {
        let spec = ShapeSpec::default();
        assert!(build_shape_path(&spec).is_empty());
    }
}
