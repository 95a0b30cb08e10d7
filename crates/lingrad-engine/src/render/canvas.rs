use crate::paint::PaintState;
use crate::path::Path;

/// Host 2D drawing surface.
///
/// Views issue at most one call per frame: `draw_path` once a shape path
/// exists, `draw_paint` before that. Implementations own clipping, blending
/// and rasterization.
pub trait Canvas {
    /// Paints the whole surface with `paint`.
    fn draw_paint(&mut self, paint: &PaintState);

    /// Fills or strokes `path` according to `paint.mode()`.
    fn draw_path(&mut self, path: &Path, paint: &PaintState);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    #[inline]
    fn draw_paint(&mut self, paint: &PaintState) {
        (**self).draw_paint(paint)
    }

    #[inline]
    fn draw_path(&mut self, path: &Path, paint: &PaintState) {
        (**self).draw_path(path, paint)
    }
}
