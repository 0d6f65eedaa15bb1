/// Per-corner radii for a rounded rectangle.
///
/// Corners follow CSS convention: top-left, top-right, bottom-right,
/// bottom-left. Units match whatever space the rectangle lives in (logical
/// or scaled pixels). Negative values are treated as zero by consumers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Multiplies every radius by `factor` (e.g. logical → scaled pixels).
    #[inline]
    pub fn scaled_by(self, factor: f32) -> Self {
        Self {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }

    /// Shrinks the radii so adjacent corners cannot overlap inside a
    /// `width` × `height` rectangle.
    ///
    /// Uses the CSS corner-overlap rule: all four radii are scaled by the
    /// smallest `side / (r_a + r_b)` ratio, never growing them.
    pub fn fit_to(self, width: f32, height: f32) -> Self {
        let reduction = (width / (self.top_left + self.top_right))
            .min(width / (self.bottom_left + self.bottom_right))
            .min(height / (self.top_left + self.bottom_left))
            .min(height / (self.top_right + self.bottom_right))
            .min(1.0);
        self.scaled_by(reduction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fit_to ────────────────────────────────────────────────────────────

    #[test]
    fn fit_to_keeps_small_radii() {
        let r = CornerRadii::all(10.0);
        assert_eq!(r.fit_to(100.0, 100.0), r);
    }

    #[test]
    fn fit_to_halves_overlapping_radii() {
        // Two 100px radii on a 100px edge overlap by 2x.
        let r = CornerRadii::all(100.0);
        assert_eq!(r.fit_to(100.0, 100.0), CornerRadii::all(50.0));
    }

    #[test]
    fn fit_to_uses_worst_side() {
        let r = CornerRadii::new(40.0, 40.0, 0.0, 0.0);
        // Top edge sum is 80 against width 40: reduction 0.5.
        let fitted = r.fit_to(40.0, 1000.0);
        assert_eq!(fitted, CornerRadii::new(20.0, 20.0, 0.0, 0.0));
    }

    #[test]
    fn fit_to_zero_radii_is_stable() {
        // Zero sums divide to inf/NaN; f32::min ignores those.
        assert_eq!(CornerRadii::zero().fit_to(0.0, 0.0), CornerRadii::zero());
    }

    // ── scaled_by ─────────────────────────────────────────────────────────

    #[test]
    fn scaled_by_scales_every_corner() {
        let r = CornerRadii::new(1.0, 2.0, 3.0, 4.0).scaled_by(2.0);
        assert_eq!(r, CornerRadii::new(2.0, 4.0, 6.0, 8.0));
    }
}
