use crate::paint::PaintState;
use crate::path::Path;
use crate::render::Canvas;

use super::DrawCmd;

/// Recorded draw stream.
///
/// A [`Canvas`] that stores commands in call order instead of rasterizing,
/// so a host can replay them into its own render pass.
///
/// `push()` is O(1); `clear()` keeps allocated capacity for reuse.
#[derive(Debug, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Commands in call order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Replays every recorded command into `canvas`, in order.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::Paint(paint) => canvas.draw_paint(paint),
                DrawCmd::Path { path, paint } => canvas.draw_path(path, paint),
            }
        }
    }
}

impl Canvas for DrawList {
    fn draw_paint(&mut self, paint: &PaintState) {
        self.push(DrawCmd::Paint(paint.clone()));
    }

    fn draw_path(&mut self, path: &Path, paint: &PaintState) {
        self.push(DrawCmd::Path { path: path.clone(), paint: paint.clone() });
    }
}
