use lingrad_engine::coords::{CornerRadii, PixelSize, Vec2};
use lingrad_engine::paint::{select_paint_mode, Color, GradientSpec, LinearGradient, PaintState};
use lingrad_engine::path::{build_shape_path, Path, ShapeSpec};
use lingrad_engine::render::Canvas;

use crate::config::ViewConfig;
use crate::props::PropUpdate;

/// A view that paints a linear gradient into a (rounded, optionally
/// stroke-only) rectangle.
///
/// Properties arrive one setter at a time or as a [`PropUpdate`] batch. Every
/// change recomputes synchronously:
/// 1. the shape path, when size, radii, stroke width or transparency changed
/// 2. the gradient shader and paint state
/// 3. a redraw request, picked up with [`take_redraw_request`](Self::take_redraw_request)
///
/// While colors and locations disagree the last valid gradient stays in place.
/// Until the first valid gradient nothing is drawn.
#[derive(Debug)]
pub struct LinearGradientView {
    config: ViewConfig,
    gradient: GradientSpec,
    shape: ShapeSpec,
    /// `None` until a shape property or size arrives; the whole surface is painted meanwhile.
    path: Option<Path>,
    shader: Option<LinearGradient>,
    paint: Option<PaintState>,
    redraw_requested: bool,
}

impl Default for LinearGradientView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl LinearGradientView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            gradient: GradientSpec::default(),
            shape: ShapeSpec::default(),
            path: None,
            shader: None,
            paint: None,
            redraw_requested: false,
        }
    }

    // ── property setters ──────────────────────────────────────────────────

    pub fn set_start_position(&mut self, p: impl Into<Vec2>) {
        self.apply(PropUpdate::new().start_position(p));
    }

    pub fn set_end_position(&mut self, p: impl Into<Vec2>) {
        self.apply(PropUpdate::new().end_position(p));
    }

    /// Packed `0xAARRGGBB` colors.
    pub fn set_colors(&mut self, colors: &[u32]) {
        self.apply(PropUpdate::new().colors(colors));
    }

    pub fn set_locations(&mut self, locations: &[f32]) {
        self.apply(PropUpdate::new().locations(locations));
    }

    pub fn set_use_angle(&mut self, use_angle: bool) {
        self.apply(PropUpdate::new().use_angle(use_angle));
    }

    pub fn set_is_transparent(&mut self, transparent: bool) {
        self.apply(PropUpdate::new().is_transparent(transparent));
    }

    /// Device pixels.
    pub fn set_stroke_width(&mut self, width: i32) {
        self.apply(PropUpdate::new().stroke_width(width));
    }

    pub fn set_angle_center(&mut self, p: impl Into<Vec2>) {
        self.apply(PropUpdate::new().angle_center(p));
    }

    /// Degrees.
    pub fn set_angle(&mut self, angle: f32) {
        self.apply(PropUpdate::new().angle(angle));
    }

    /// Eight radii in dp; converted to device pixels with the configured density.
    pub fn set_border_radii(&mut self, radii_dp: &[f32]) {
        self.apply(PropUpdate::new().border_radii(radii_dp));
    }

    /// Host layout callback with the new size in device pixels.
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.apply(PropUpdate::new().size(width, height));
    }

    /// Writes every field set in `update`, then recomputes once.
    pub fn apply(&mut self, update: PropUpdate) {
        if update.is_empty() {
            return;
        }
        let shape_changed = update.touches_shape();

        let PropUpdate {
            start_position,
            end_position,
            colors,
            locations,
            use_angle,
            is_transparent,
            stroke_width,
            angle_center,
            angle,
            border_radii,
            size,
        } = update;

        let g = &mut self.gradient;
        if let Some(v) = start_position { g.start = v; }
        if let Some(v) = end_position { g.end = v; }
        if let Some(v) = colors { g.colors = Some(v.into_iter().map(Color::from_argb_u32).collect()); }
        if let Some(v) = locations { g.locations = Some(v); }
        if let Some(v) = use_angle { g.use_angle = v; }
        if let Some(v) = angle_center { g.angle_center = v; }
        if let Some(v) = angle { g.angle = v; }

        let s = &mut self.shape;
        if let Some(v) = is_transparent { s.transparent = v; }
        if let Some(v) = stroke_width { s.stroke_width = v; }
        if let Some(v) = size { s.size = v; }
        if let Some(v) = border_radii {
            match CornerRadii::from_slice(&v) {
                Some(dp) => s.radii = self.config.radii_to_px(dp),
                None => log::warn!(
                    "LinearGradientView: border radii need 8 values, got {}; keeping previous radii",
                    v.len()
                ),
            }
        }

        self.refresh(shape_changed);
    }

    // ── recompute ─────────────────────────────────────────────────────────

    fn refresh(&mut self, shape_changed: bool) {
        if shape_changed {
            self.rebuild_path();
        }
        self.rebuild_shader();
        self.redraw_requested = true;
    }

    fn rebuild_path(&mut self) {
        let path = build_shape_path(&self.shape);
        log::trace!(
            "LinearGradientView: path rebuilt, bounds {:?}, {} cmds",
            path.bounds(),
            path.cmds().len()
        );
        self.path = Some(path);
    }

    fn rebuild_shader(&mut self) {
        match self.gradient.resolve(self.shape.size) {
            Ok(g) => self.shader = Some(g),
            Err(issue) => log::debug!("LinearGradientView: gradient not rebuilt ({issue})"),
        }

        // The paint is rebuilt from scratch on every pass so nothing from a
        // previous stroke/fill mode survives.
        self.paint = self.shader.as_ref().map(|shader| {
            PaintState::new(
                select_paint_mode(self.shape.transparent, self.shape.stroke_width),
                shader.clone(),
                self.config.anti_alias,
            )
        });
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws the current frame. Does nothing until a gradient has resolved.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let Some(paint) = &self.paint else { return; };
        match &self.path {
            Some(path) => canvas.draw_path(path, paint),
            None => canvas.draw_paint(paint),
        }
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    #[inline]
    pub fn gradient_spec(&self) -> &GradientSpec {
        &self.gradient
    }

    #[inline]
    pub fn shape_spec(&self) -> &ShapeSpec {
        &self.shape
    }

    #[inline]
    pub fn size(&self) -> PixelSize {
        self.shape.size
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Last successfully resolved gradient.
    #[inline]
    pub fn shader(&self) -> Option<&LinearGradient> {
        self.shader.as_ref()
    }

    #[inline]
    pub fn paint_state(&self) -> Option<&PaintState> {
        self.paint.as_ref()
    }

    /// Pixel-space axis of the current shader.
    pub fn axis(&self) -> Option<(Vec2, Vec2)> {
        self.shader.as_ref().map(|g| (g.start, g.end))
    }
}
