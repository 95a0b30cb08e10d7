use super::Vec2;

/// Axis-aligned rectangle in device pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Moves every edge inward by `d`. Negative `d` grows the rect.
    ///
    /// The result may be inverted when `d` exceeds half the size.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            self.size.x - 2.0 * d,
            self.size.y - 2.0 * d,
        )
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let rect = r(10.0, 0.0, -4.0, 5.0);
        let n = rect.normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_edge() {
        let rect = r(0.0, 0.0, 100.0, 100.0).inset(2.0);
        assert_eq!(rect.min(), Vec2::new(2.0, 2.0));
        assert_eq!(rect.max(), Vec2::new(98.0, 98.0));
    }

    #[test]
    fn negative_inset_grows() {
        let rect = r(0.0, 0.0, 10.0, 10.0).inset(-1.0);
        assert_eq!(rect, r(-1.0, -1.0, 12.0, 12.0));
    }

    #[test]
    fn oversized_inset_inverts_until_normalized() {
        let rect = r(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert!(rect.is_empty());
        assert_eq!(rect.normalized(), r(2.0, 2.0, 6.0, 6.0));
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
