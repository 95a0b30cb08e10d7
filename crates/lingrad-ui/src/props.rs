use lingrad_engine::coords::{PixelSize, Vec2};

/// A batch of property changes applied in one step.
///
/// Unset fields leave the view's current value alone. Building the whole
/// change first and applying it once avoids the transient states a stream of
/// single setters goes through (e.g. new colors before matching locations).
///
/// # Example
/// ```rust,ignore
/// view.apply(
///     PropUpdate::new()
///         .colors(&[0xFFFF0000, 0xFF00FF00, 0xFF0000FF])
///         .locations(&[0.0, 0.2, 1.0]),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropUpdate {
    pub(crate) start_position: Option<Vec2>,
    pub(crate) end_position: Option<Vec2>,
    pub(crate) colors: Option<Vec<u32>>,
    pub(crate) locations: Option<Vec<f32>>,
    pub(crate) use_angle: Option<bool>,
    pub(crate) is_transparent: Option<bool>,
    pub(crate) stroke_width: Option<i32>,
    pub(crate) angle_center: Option<Vec2>,
    pub(crate) angle: Option<f32>,
    pub(crate) border_radii: Option<Vec<f32>>,
    pub(crate) size: Option<PixelSize>,
}

impl PropUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fractional start point, used when angle mode is off.
    pub fn start_position(mut self, p: impl Into<Vec2>) -> Self { self.start_position = Some(p.into()); self }
    /// Fractional end point, used when angle mode is off.
    pub fn end_position(mut self, p: impl Into<Vec2>) -> Self { self.end_position = Some(p.into()); self }
    /// Packed `0xAARRGGBB` colors.
    pub fn colors(mut self, v: &[u32]) -> Self { self.colors = Some(v.to_vec()); self }
    pub fn locations(mut self, v: &[f32]) -> Self { self.locations = Some(v.to_vec()); self }
    pub fn use_angle(mut self, v: bool) -> Self { self.use_angle = Some(v); self }
    pub fn is_transparent(mut self, v: bool) -> Self { self.is_transparent = Some(v); self }
    pub fn stroke_width(mut self, v: i32) -> Self { self.stroke_width = Some(v); self }
    pub fn angle_center(mut self, p: impl Into<Vec2>) -> Self { self.angle_center = Some(p.into()); self }
    /// Degrees.
    pub fn angle(mut self, v: f32) -> Self { self.angle = Some(v); self }
    /// Eight values in dp: `[tl.x, tl.y, tr.x, tr.y, br.x, br.y, bl.x, bl.y]`.
    pub fn border_radii(mut self, v: &[f32]) -> Self { self.border_radii = Some(v.to_vec()); self }
    pub fn size(mut self, width: i32, height: i32) -> Self { self.size = Some(PixelSize::new(width, height)); self }

    /// True if the update changes anything the shape path depends on.
    pub fn touches_shape(&self) -> bool {
        self.is_transparent.is_some()
            || self.stroke_width.is_some()
            || self.border_radii.is_some()
            || self.size.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
