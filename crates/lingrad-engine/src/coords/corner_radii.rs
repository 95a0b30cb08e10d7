use super::{Rect, Vec2};

/// Per-corner elliptical radii for a rounded rectangle (device pixels).
///
/// Each corner carries an `x` (horizontal) and `y` (vertical) radius.
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform circular radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        let v = Vec2::new(r, r);
        Self { top_left: v, top_right: v, bottom_right: v, bottom_left: v }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Reads the flat eight-value layout
    /// `[tl.x, tl.y, tr.x, tr.y, br.x, br.y, bl.x, bl.y]`.
    ///
    /// Returns `None` unless exactly eight values are given.
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        let v: &[f32; 8] = values.try_into().ok()?;
        Some(Self::from_array(*v))
    }

    #[inline]
    pub const fn from_array(v: [f32; 8]) -> Self {
        Self {
            top_left: Vec2::new(v[0], v[1]),
            top_right: Vec2::new(v[2], v[3]),
            bottom_right: Vec2::new(v[4], v[5]),
            bottom_left: Vec2::new(v[6], v[7]),
        }
    }

    /// Multiplies every radius by `factor` (e.g. dp → px density).
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }

    /// Returns radii that fit inside `rect`.
    ///
    /// - negative or non-finite radii become zero
    /// - a corner with one zero component is made fully square
    /// - if two radii on one side sum past that side's length, every radius is
    ///   scaled by the same factor so the tightest side fits exactly
    pub fn fitted_to(self, rect: Rect) -> Self {
        let fix = |r: Vec2| {
            let x = if r.x.is_finite() && r.x > 0.0 { r.x } else { 0.0 };
            let y = if r.y.is_finite() && r.y > 0.0 { r.y } else { 0.0 };
            if x == 0.0 || y == 0.0 { Vec2::zero() } else { Vec2::new(x, y) }
        };

        let tl = fix(self.top_left);
        let tr = fix(self.top_right);
        let br = fix(self.bottom_right);
        let bl = fix(self.bottom_left);

        let w = rect.width().abs();
        let h = rect.height().abs();

        let mut scale = 1.0f32;
        for (limit, a, b) in [
            (w, tl.x, tr.x), // top
            (h, tr.y, br.y), // right
            (w, br.x, bl.x), // bottom
            (h, bl.y, tl.y), // left
        ] {
            let sum = a + b;
            if sum > limit && sum > 0.0 {
                scale = scale.min(limit / sum);
            }
        }

        let radii = Self::new(tl, tr, br, bl);
        if scale < 1.0 { radii.scaled(scale) } else { radii }
    }
}
