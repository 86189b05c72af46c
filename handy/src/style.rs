//! Rendering style shared by every draw call.
//!
//! A [`StyleConfig`] is owned by the renderer and only changes through its
//! setters. Generators borrow it immutably for the duration of a draw.
//! Setters never fail: out-of-range values are clamped and non-finite values
//! are ignored, so a transient bad value (a slider mid-drag) can't break a
//! redraw.

/// Smallest hachure gap accepted, keeps line counts bounded.
pub const MIN_FILL_GAP: f64 = 0.1;

/// Rendering parameters for sketchy output.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    roughness: f64,
    hachure_angle: f64,
    hachure_perturbation: f64,
    handy: bool,
    fill_gap: f64,
    bowing: f64,
    max_offset: f64,
    alternating: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            hachure_angle: 45.0,
            hachure_perturbation: 0.0,
            handy: true,
            fill_gap: 4.0,
            bowing: 1.0,
            max_offset: 2.0,
            alternating: false,
        }
    }
}

/// Keep `current` when `value` is NaN or infinite, otherwise clamp it to `min`.
fn sanitize(name: &str, value: f64, current: f64, min: f64) -> f64 {
    if !value.is_finite() {
        log::warn!("ignoring non-finite {name}: {value}");
        return current;
    }
    value.max(min)
}

impl StyleConfig {
    /// Perturbation magnitude multiplier. 1.0 is normal sketchiness, 0 is exact.
    #[inline]
    pub fn roughness(&self) -> f64 {
        self.roughness
    }

    /// Hachure line angle in degrees as last set (not normalized).
    #[inline]
    pub fn hachure_angle(&self) -> f64 {
        self.hachure_angle
    }

    /// Hachure angle folded into [0, 180), lines have no direction.
    #[inline]
    pub fn normalized_hachure_angle(&self) -> f64 {
        self.hachure_angle.rem_euclid(180.0)
    }

    /// Maximum per-line random jitter of the hachure angle, in degrees.
    #[inline]
    pub fn hachure_perturbation(&self) -> f64 {
        self.hachure_perturbation
    }

    #[inline]
    pub fn is_handy(&self) -> bool {
        self.handy
    }

    /// Distance between neighbouring hachure lines.
    #[inline]
    pub fn fill_gap(&self) -> f64 {
        self.fill_gap
    }

    #[inline]
    pub fn bowing(&self) -> f64 {
        self.bowing
    }

    /// Largest vertex offset at roughness 1.0.
    #[inline]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    #[inline]
    pub fn is_alternating(&self) -> bool {
        self.alternating
    }

    /// True when strokes should actually be perturbed.
    #[inline]
    pub fn perturbs(&self) -> bool {
        self.handy && self.roughness > 0.0
    }

    pub fn set_roughness(&mut self, roughness: f64) {
        self.roughness = sanitize("roughness", roughness, self.roughness, 0.0);
    }

    pub fn set_hachure_angle(&mut self, degrees: f64) {
        self.hachure_angle = sanitize("hachure angle", degrees, self.hachure_angle, f64::MIN);
    }

    pub fn set_hachure_perturbation(&mut self, degrees: f64) {
        self.hachure_perturbation = sanitize(
            "hachure perturbation",
            degrees,
            self.hachure_perturbation,
            0.0,
        );
    }

    pub fn set_handy(&mut self, handy: bool) {
        self.handy = handy;
    }

    pub fn set_fill_gap(&mut self, gap: f64) {
        self.fill_gap = sanitize("fill gap", gap, self.fill_gap, MIN_FILL_GAP);
    }

    pub fn set_bowing(&mut self, bowing: f64) {
        self.bowing = sanitize("bowing", bowing, self.bowing, 0.0);
    }

    pub fn set_max_offset(&mut self, offset: f64) {
        self.max_offset = sanitize("max offset", offset, self.max_offset, 0.0);
    }

    pub fn set_alternating(&mut self, alternating: bool) {
        self.alternating = alternating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_clamp_to_zero() {
        let mut style = StyleConfig::default();
        style.set_roughness(-3.0);
        style.set_hachure_perturbation(-5.0);
        style.set_bowing(-1.0);
        style.set_max_offset(-2.0);

        assert_eq!(style.roughness(), 0.0);
        assert_eq!(style.hachure_perturbation(), 0.0);
        assert_eq!(style.bowing(), 0.0);
        assert_eq!(style.max_offset(), 0.0);
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let mut style = StyleConfig::default();
        style.set_roughness(2.5);
        style.set_roughness(f64::NAN);
        style.set_hachure_angle(f64::INFINITY);
        style.set_fill_gap(f64::NEG_INFINITY);

        assert_eq!(style.roughness(), 2.5);
        assert_eq!(style.hachure_angle(), 45.0);
        assert_eq!(style.fill_gap(), 4.0);
    }

    #[test]
    fn fill_gap_has_floor() {
        let mut style = StyleConfig::default();
        style.set_fill_gap(0.0);
        assert_eq!(style.fill_gap(), MIN_FILL_GAP);
    }

    #[test]
    fn hachure_angle_normalizes_mod_180() {
        let mut style = StyleConfig::default();
        style.set_hachure_angle(-45.0);
        assert_eq!(style.hachure_angle(), -45.0);
        assert_eq!(style.normalized_hachure_angle(), 135.0);

        style.set_hachure_angle(370.0);
        assert!((style.normalized_hachure_angle() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_roughness_does_not_perturb() {
        let mut style = StyleConfig::default();
        assert!(style.perturbs());
        style.set_roughness(0.0);
        assert!(!style.perturbs());
        style.set_roughness(1.0);
        style.set_handy(false);
        assert!(!style.perturbs());
    }
}
