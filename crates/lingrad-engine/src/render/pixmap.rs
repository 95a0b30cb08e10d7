use anyhow::{ensure, Context, Result};
use tiny_skia::{FillRule, GradientStop, Pixmap, Point, Shader, Stroke, Transform};

use crate::coords::PixelSize;
use crate::paint::{Color, LinearGradient, PaintMode, PaintState, SpreadMode};
use crate::path::{Path, PathCmd};

use super::Canvas;

/// CPU canvas backed by a tiny-skia pixmap.
///
/// Pixels are stored premultiplied RGBA8. Gradients that tiny-skia cannot turn
/// into a shader are skipped with a debug log.
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("failed to allocate {width}x{height} pixmap"))?;
        Ok(Self { pixmap })
    }

    /// Canvas matching a view's pixel size.
    pub fn for_size(size: PixelSize) -> Result<Self> {
        ensure!(size.is_valid(), "canvas size must be positive, got {}x{}", size.width, size.height);
        Self::new(size.width as u32, size.height as u32)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied `[r, g, b, a]` at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|c| [c.red(), c.green(), c.blue(), c.alpha()])
    }

    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

impl Canvas for PixmapCanvas {
    fn draw_paint(&mut self, state: &PaintState) {
        let Some(paint) = sk_paint(state) else { return; };
        let Some(rect) = tiny_skia::Rect::from_xywh(0.0, 0.0, self.width() as f32, self.height() as f32) else {
            return;
        };
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn draw_path(&mut self, path: &Path, state: &PaintState) {
        let Some(sk_path) = sk_path(path) else { return; };
        let Some(paint) = sk_paint(state) else { return; };

        match state.mode() {
            PaintMode::Fill => {
                self.pixmap
                    .fill_path(&sk_path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            PaintMode::Stroke { width } => {
                let stroke = Stroke { width, ..Stroke::default() };
                self.pixmap
                    .stroke_path(&sk_path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }
}

// ── conversions ───────────────────────────────────────────────────────────

fn sk_color(c: Color) -> tiny_skia::Color {
    let (r, g, b, a) = c.to_straight();
    tiny_skia::Color::from_rgba(
        r.clamp(0.0, 1.0),
        g.clamp(0.0, 1.0),
        b.clamp(0.0, 1.0),
        a.clamp(0.0, 1.0),
    )
    .unwrap_or(tiny_skia::Color::TRANSPARENT)
}

fn sk_shader(g: &LinearGradient) -> Option<Shader<'static>> {
    if !g.is_valid() {
        return None;
    }
    let stops = g
        .stops
        .iter()
        .map(|s| GradientStop::new(s.t, sk_color(s.color)))
        .collect();
    let spread = match g.spread {
        SpreadMode::Pad => tiny_skia::SpreadMode::Pad,
    };
    tiny_skia::LinearGradient::new(
        Point::from_xy(g.start.x, g.start.y),
        Point::from_xy(g.end.x, g.end.y),
        stops,
        spread,
        Transform::identity(),
    )
}

fn sk_paint(state: &PaintState) -> Option<tiny_skia::Paint<'static>> {
    let Some(shader) = sk_shader(state.shader()) else {
        log::debug!("PixmapCanvas: gradient has no usable shader; skipping draw");
        return None;
    };
    let mut paint = tiny_skia::Paint::default();
    paint.shader = shader;
    paint.anti_alias = state.anti_alias();
    Some(paint)
}

fn sk_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for cmd in path.cmds() {
        match *cmd {
            PathCmd::MoveTo(p) => pb.move_to(p.x, p.y),
            PathCmd::LineTo(p) => pb.line_to(p.x, p.y),
            PathCmd::CubicTo { c1, c2, to } => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y),
            PathCmd::Close => pb.close(),
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Vec2};
    use crate::paint::{select_paint_mode, ColorStop};
    use crate::path::{build_shape_path, ShapeSpec};

    const RED: u32 = 0xFFFF0000;
    const BLUE: u32 = 0xFF0000FF;

    fn vertical(height: f32, from: u32, to: u32) -> LinearGradient {
        LinearGradient::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, height),
            vec![
                ColorStop::new(0.0, Color::from_argb_u32(from)),
                ColorStop::new(1.0, Color::from_argb_u32(to)),
            ],
            SpreadMode::Pad,
        )
    }

    fn vertical_red_to_blue(height: f32) -> LinearGradient {
        vertical(height, RED, BLUE)
    }

    fn flat(color: u32) -> LinearGradient {
        vertical(1.0, color, color)
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(PixmapCanvas::for_size(PixelSize::new(0, 10)).is_err());
    }

    #[test]
    fn fill_path_interpolates_along_axis() {
        let mut canvas = PixmapCanvas::new(10, 10).unwrap();
        let shape = ShapeSpec { size: PixelSize::new(10, 10), ..ShapeSpec::default() };
        let state = PaintState::new(PaintMode::Fill, vertical_red_to_blue(10.0), true);
        canvas.draw_path(&build_shape_path(&shape), &state);

        let top = canvas.pixel(5, 0).unwrap();
        let bottom = canvas.pixel(5, 9).unwrap();
        assert!(top[0] > 200 && top[2] < 50, "top = {top:?}");
        assert!(bottom[2] > 200 && bottom[0] < 50, "bottom = {bottom:?}");
        assert_eq!(top[3], 255);
    }

    #[test]
    fn stroke_leaves_interior_clear() {
        let mut canvas = PixmapCanvas::new(20, 20).unwrap();
        let shape = ShapeSpec {
            size: PixelSize::new(20, 20),
            radii: CornerRadii::zero(),
            stroke_width: 4,
            transparent: true,
        };
        let state = PaintState::new(select_paint_mode(true, 4), flat(RED), true);
        canvas.draw_path(&build_shape_path(&shape), &state);

        assert!(canvas.pixel(10, 1).unwrap()[3] > 0);
        assert_eq!(canvas.pixel(10, 10).unwrap()[3], 0);
    }

    #[test]
    fn draw_paint_covers_surface() {
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();
        let state = PaintState::new(PaintMode::Fill, flat(BLUE), false);
        canvas.draw_paint(&state);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 255, 255]));
    }

    #[test]
    fn empty_path_draws_nothing() {
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();
        let state = PaintState::new(PaintMode::Fill, flat(BLUE), true);
        canvas.draw_path(&Path::default(), &state);
        assert_eq!(canvas.pixel(1, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn non_finite_gradient_is_skipped() {
        let mut canvas = PixmapCanvas::new(4, 4).unwrap();
        let mut g = flat(BLUE);
        g.end = Vec2::new(f32::NAN, 0.0);
        canvas.draw_paint(&PaintState::new(PaintMode::Fill, g, true));
        assert_eq!(canvas.pixel(1, 1), Some([0, 0, 0, 0]));
    }
}
