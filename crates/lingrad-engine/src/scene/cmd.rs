use crate::paint::PaintState;
use crate::path::Path;

/// Canvas-agnostic draw command, one per [`Canvas`](crate::render::Canvas) call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Whole-surface paint.
    Paint(PaintState),
    /// Path filled or stroked per the paint's mode.
    Path { path: Path, paint: PaintState },
}
