use std::f32::consts::SQRT_2;
use std::fmt;

use crate::coords::{PixelSize, Vec2};

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
///
/// Views only ever clamp; the enum names the mode canvases must honor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] but is not enforced; canvases clamp at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Resolved linear gradient in device pixel space.
///
/// This is the shader input: two axis endpoints plus stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self {
            start,
            end,
            stops,
            spread,
        }
    }

    /// Returns true when the gradient is structurally usable by a canvas.
    ///
    /// Non-finite positions (e.g. a NaN angle) make it unusable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
    }
}

/// Why a [`GradientSpec`] cannot currently produce a shader.
///
/// These are transient states while properties stream in one at a time,
/// not failures to surface to a user.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpecIssue {
    /// No color list has been set yet.
    ColorsUnset,
    /// A gradient needs at least two colors.
    TooFewColors(usize),
    /// A non-empty location list does not pair up with the colors.
    LocationCountMismatch { colors: usize, locations: usize },
}

impl fmt::Display for SpecIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecIssue::ColorsUnset => write!(f, "colors are not set"),
            SpecIssue::TooFewColors(n) => write!(f, "gradient needs at least 2 colors, got {n}"),
            SpecIssue::LocationCountMismatch { colors, locations } => {
                write!(f, "{colors} colors but {locations} locations")
            }
        }
    }
}

impl std::error::Error for SpecIssue {}

/// Declarative gradient description, as delivered by the host's properties.
///
/// Positions are fractional over the view bounds. Fields are public and may be
/// momentarily inconsistent; [`check`](Self::check) reports whether the spec
/// can be resolved right now.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub colors: Option<Vec<Color>>,
    pub locations: Option<Vec<f32>>,
    pub use_angle: bool,
    /// Degrees. 0 points up, 90 points right.
    pub angle: f32,
    pub angle_center: Vec2,
    pub start: Vec2,
    pub end: Vec2,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            colors: None,
            locations: None,
            use_angle: false,
            angle: 45.0,
            angle_center: Vec2::new(0.5, 0.5),
            start: Vec2::new(0.0, 0.0),
            end: Vec2::new(0.0, 1.0),
        }
    }
}

impl GradientSpec {
    /// Verifies that colors and locations can form a gradient.
    ///
    /// An empty location list counts as absent (stops spread evenly).
    pub fn check(&self) -> Result<(), SpecIssue> {
        let colors = self.colors.as_ref().ok_or(SpecIssue::ColorsUnset)?;
        if colors.len() < 2 {
            return Err(SpecIssue::TooFewColors(colors.len()));
        }
        match &self.locations {
            Some(locs) if !locs.is_empty() && locs.len() != colors.len() => {
                Err(SpecIssue::LocationCountMismatch { colors: colors.len(), locations: locs.len() })
            }
            _ => Ok(()),
        }
    }

    /// Fractional axis endpoints, before mapping onto pixels.
    pub fn fractional_axis(&self) -> (Vec2, Vec2) {
        if self.use_angle {
            let half = angle_direction(self.angle) / 2.0;
            (self.angle_center - half, self.angle_center + half)
        } else {
            (self.start, self.end)
        }
    }

    /// Resolves the full shader description: pixel axis, stops, clamp spread.
    pub fn resolve(&self, size: PixelSize) -> Result<LinearGradient, SpecIssue> {
        self.check()?;
        let colors = self.colors.as_deref().ok_or(SpecIssue::ColorsUnset)?;
        let (start, end) = self.pixel_axis(size);
        Ok(LinearGradient::new(start, end, self.stops(colors), SpreadMode::Pad))
    }

    /// Axis endpoints mapped onto a `size` pixel view.
    fn pixel_axis(&self, size: PixelSize) -> (Vec2, Vec2) {
        let (start, end) = self.fractional_axis();
        let px = size.as_vec2();
        (start.scale_by(px), end.scale_by(px))
    }

    /// Color stops: explicit locations when present, otherwise evenly spaced.
    ///
    /// Callers must have passed [`check`](Self::check).
    fn stops(&self, colors: &[Color]) -> Vec<ColorStop> {
        let explicit = self.locations.as_deref().filter(|l| !l.is_empty());
        let last = (colors.len() - 1) as f32;

        colors
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let t = match explicit {
                    Some(locs) => locs[i],
                    None => i as f32 / last,
                };
                ColorStop::new(t, color)
            })
            .collect()
    }
}

/// Direction vector for `angle` degrees, `√2` long.
///
/// 0° points up (toward -Y), 90° points right. The `√2` length makes the axis
/// span the unit square's diagonal at every rotation, so corners never fall
/// past the last stop.
pub fn angle_direction(angle: f32) -> Vec2 {
    let radians = (angle - 90.0).to_radians();
    Vec2::from_polar(radians, SQRT_2)
}

/// Resolves the gradient axis into device pixels.
///
/// Returns `None` while the spec is inconsistent (see [`GradientSpec::check`]).
pub fn resolve_axis(spec: &GradientSpec, size: PixelSize) -> Option<(Vec2, Vec2)> {
    spec.check().ok()?;
    Some(spec.pixel_axis(size))
}

/// Option form of [`GradientSpec::resolve`] for callers that only skip.
pub fn resolve_gradient(spec: &GradientSpec, size: PixelSize) -> Option<LinearGradient> {
    spec.resolve(size).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn colors(n: usize) -> Vec<Color> {
        (0..n).map(|i| Color::from_argb_u32(0xFF000000 | (i as u32 * 40))).collect()
    }

    fn spec_with(n_colors: usize, locations: Option<Vec<f32>>) -> GradientSpec {
        GradientSpec { colors: Some(colors(n_colors)), locations, ..GradientSpec::default() }
    }

    fn angled(angle: f32) -> GradientSpec {
        GradientSpec { use_angle: true, angle, ..spec_with(2, None) }
    }

    const SQUARE: PixelSize = PixelSize::new(100, 100);

    // ── consistency ───────────────────────────────────────────────────────

    #[test]
    fn equal_lengths_resolve() {
        for n in 2..6 {
            let locs = (0..n).map(|i| i as f32 / (n - 1) as f32).collect();
            assert!(resolve_axis(&spec_with(n, Some(locs)), SQUARE).is_some(), "n = {n}");
        }
    }

    #[test]
    fn unequal_lengths_skip() {
        for (c, l) in [(2, 3), (3, 2), (4, 1), (5, 7)] {
            let spec = spec_with(c, Some(vec![0.5; l]));
            assert!(resolve_axis(&spec, SQUARE).is_none(), "{c} colors / {l} locations");
            assert_eq!(
                spec.check(),
                Err(SpecIssue::LocationCountMismatch { colors: c, locations: l })
            );
        }
    }

    #[test]
    fn unset_colors_skip() {
        let spec = GradientSpec::default();
        assert_eq!(spec.check(), Err(SpecIssue::ColorsUnset));
        assert!(resolve_axis(&spec, SQUARE).is_none());
    }

    #[test]
    fn single_color_skips() {
        let spec = spec_with(1, None);
        assert_eq!(spec.check(), Err(SpecIssue::TooFewColors(1)));
        assert!(resolve_gradient(&spec, SQUARE).is_none());
    }

    #[test]
    fn empty_locations_count_as_absent() {
        let g = resolve_gradient(&spec_with(3, Some(Vec::new())), SQUARE).unwrap();
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.0, 0.5, 1.0]);
    }

    // ── explicit endpoints ────────────────────────────────────────────────

    #[test]
    fn default_endpoints_run_top_to_bottom() {
        for (w, h) in [(1, 1), (100, 40), (37, 250)] {
            let (s, e) = resolve_axis(&spec_with(2, None), PixelSize::new(w, h)).unwrap();
            assert_eq!(s, Vec2::new(0.0, 0.0));
            assert_eq!(e, Vec2::new(0.0, h as f32));
        }
    }

    #[test]
    fn explicit_endpoints_scale_per_axis() {
        let spec = GradientSpec {
            start: Vec2::new(0.25, 0.5),
            end: Vec2::new(1.0, 0.0),
            ..spec_with(2, None)
        };
        let (s, e) = resolve_axis(&spec, PixelSize::new(200, 80)).unwrap();
        assert_eq!(s, Vec2::new(50.0, 40.0));
        assert_eq!(e, Vec2::new(200.0, 0.0));
    }

    // ── angle mode ────────────────────────────────────────────────────────

    #[test]
    fn angle_zero_runs_bottom_to_top() {
        let h = SQRT_2 / 2.0;
        let (s, e) = resolve_axis(&angled(0.0), SQUARE).unwrap();
        assert!(approx(s, Vec2::new(50.0, (0.5 + h) * 100.0)), "{s:?}");
        assert!(approx(e, Vec2::new(50.0, (0.5 - h) * 100.0)), "{e:?}");
        assert!(s.y > e.y);
    }

    #[test]
    fn angle_ninety_runs_left_to_right() {
        let h = SQRT_2 / 2.0;
        let (s, e) = resolve_axis(&angled(90.0), SQUARE).unwrap();
        assert!(approx(s, Vec2::new((0.5 - h) * 100.0, 50.0)), "{s:?}");
        assert!(approx(e, Vec2::new((0.5 + h) * 100.0, 50.0)), "{e:?}");
    }

    #[test]
    fn angle_one_eighty_reverses_zero() {
        let (s0, e0) = resolve_axis(&angled(0.0), SQUARE).unwrap();
        let (s180, e180) = resolve_axis(&angled(180.0), SQUARE).unwrap();
        assert!(approx(s0, e180));
        assert!(approx(e0, s180));
    }

    #[test]
    fn angle_axis_spans_diagonal() {
        for angle in [0.0, 30.0, 45.0, 135.0, 270.0, -60.0] {
            let (s, e) = angled(angle).fractional_axis();
            let d = e - s;
            assert!(((d.x * d.x + d.y * d.y).sqrt() - SQRT_2).abs() < EPS, "angle {angle}");
        }
    }

    #[test]
    fn angle_is_centered_on_angle_center() {
        let spec = GradientSpec { angle_center: Vec2::new(0.2, 0.8), ..angled(45.0) };
        let (s, e) = spec.fractional_axis();
        assert!(approx((s + e) / 2.0, Vec2::new(0.2, 0.8)));
    }

    #[test]
    fn angle_ignored_without_use_angle() {
        let spec = GradientSpec { angle: 90.0, ..spec_with(2, None) };
        assert_eq!(spec.fractional_axis(), (Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0)));
    }

    // ── stops ─────────────────────────────────────────────────────────────

    #[test]
    fn explicit_locations_become_stops() {
        let spec = spec_with(3, Some(vec![0.1, 0.3, 0.9]));
        let g = resolve_gradient(&spec, SQUARE).unwrap();
        let ts: Vec<f32> = g.stops.iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.1, 0.3, 0.9]);
        assert_eq!(g.spread, SpreadMode::Pad);
        assert!(g.is_valid());
    }

    #[test]
    fn zero_size_yields_degenerate_axis() {
        let g = resolve_gradient(&spec_with(2, None), PixelSize::new(0, 0)).unwrap();
        assert_eq!(g.start, g.end);
    }

    #[test]
    fn resolve_reports_the_issue() {
        let spec = spec_with(3, Some(vec![0.0, 1.0]));
        assert_eq!(
            spec.resolve(SQUARE),
            Err(SpecIssue::LocationCountMismatch { colors: 3, locations: 2 })
        );
        assert_eq!(spec_with(2, None).resolve(SQUARE).ok(), resolve_gradient(&spec_with(2, None), SQUARE));
    }

    #[test]
    fn nan_angle_resolves_but_is_not_valid() {
        let g = resolve_gradient(&angled(f32::NAN), SQUARE).unwrap();
        assert!(!g.is_valid());
    }

    #[test]
    fn resolution_is_repeatable() {
        let spec = angled(33.0);
        assert_eq!(resolve_gradient(&spec, SQUARE), resolve_gradient(&spec, SQUARE));
    }
}
