use super::{Rect, Vec2};

/// View size in device pixels, as reported by the host's size-change callback.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Size as a float vector, for scaling fractional points.
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Full view bounds `(0, 0) - (width, height)`.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}
