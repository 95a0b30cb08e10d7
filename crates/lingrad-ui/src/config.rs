use lingrad_engine::coords::CornerRadii;

/// Per-view configuration supplied by the host at construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewConfig {
    /// Device pixels per density-independent pixel. Border radii arrive in dp.
    pub pixel_density: f32,
    /// Anti-alias both fill and stroke.
    pub anti_alias: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { pixel_density: 1.0, anti_alias: true }
    }
}

impl ViewConfig {
    /// Sets the density. Non-finite or non-positive values fall back to `1.0`.
    pub fn with_pixel_density(mut self, density: f32) -> Self {
        self.pixel_density = if density.is_finite() && density > 0.0 {
            density
        } else {
            log::warn!("ViewConfig: invalid pixel density {density}; using 1.0");
            1.0
        };
        self
    }

    pub fn with_anti_alias(mut self, on: bool) -> Self {
        self.anti_alias = on;
        self
    }

    /// Converts host border radii from dp to device pixels.
    #[inline]
    pub fn radii_to_px(&self, dp: CornerRadii) -> CornerRadii {
        dp.scaled(self.pixel_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_scales_dp() {
        let cfg = ViewConfig::default().with_pixel_density(2.75);
        assert_eq!(cfg.radii_to_px(CornerRadii::all(4.0)), CornerRadii::all(11.0));
    }

    #[test]
    fn bad_density_falls_back() {
        assert_eq!(ViewConfig::default().with_pixel_density(0.0).pixel_density, 1.0);
        assert_eq!(ViewConfig::default().with_pixel_density(f32::NAN).pixel_density, 1.0);
    }
}
