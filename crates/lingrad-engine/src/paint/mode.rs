use super::LinearGradient;

/// How the shape path is painted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PaintMode {
    /// Shader fills the path interior.
    Fill,
    /// Only the outline is traced, `width` device pixels wide.
    ///
    /// A width of zero draws a hairline.
    Stroke { width: f32 },
}

/// Picks the paint mode for a view.
///
/// `transparent` views are stroke-only; the stroke width applies only then.
#[inline]
pub fn select_paint_mode(transparent: bool, stroke_width: i32) -> PaintMode {
    if transparent {
        PaintMode::Stroke { width: stroke_width.max(0) as f32 }
    } else {
        PaintMode::Fill
    }
}

/// Complete paint state handed to a canvas.
///
/// There are no setters. Every change builds a new value through
/// [`PaintState::new`], so a stroke width or style never carries over from a
/// previous mode.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    mode: PaintMode,
    anti_alias: bool,
    shader: LinearGradient,
}

impl PaintState {
    pub fn new(mode: PaintMode, shader: LinearGradient, anti_alias: bool) -> Self {
        Self { mode, anti_alias, shader }
    }

    #[inline]
    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    #[inline]
    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    #[inline]
    pub fn shader(&self) -> &LinearGradient {
        &self.shader
    }

    /// Stroke width when stroking, `None` when filling.
    #[inline]
    pub fn stroke_width(&self) -> Option<f32> {
        match self.mode {
            PaintMode::Fill => None,
            PaintMode::Stroke { width } => Some(width),
        }
    }
}
