use core::ops::Add;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - Compositing and coverage multiplication reduce to channel-wise ops.
/// - Matches typical GPU blending configurations for compositor output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

/// BT.709 luminance weights (ITU-R, perceptual).
const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Creates a premultiplied color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_straight_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// BT.709 luminance of the (premultiplied) RGB channels.
    ///
    /// Because the inputs are premultiplied, the result is premultiplied by
    /// the same alpha, so it can replace the RGB channels directly.
    #[inline]
    pub fn luminance(self) -> f32 {
        self.r * LUMA_WEIGHTS[0] + self.g * LUMA_WEIGHTS[1] + self.b * LUMA_WEIGHTS[2]
    }

    /// Adjusts saturation: each RGB channel is interpolated between the
    /// luminance gray and its original value by `factor`.
    ///
    /// `0.0` is fully desaturated, `1.0` is the identity, values above 1
    /// oversaturate. Alpha is unchanged.
    #[inline]
    pub fn saturated(self, factor: f32) -> Self {
        let gray = self.luminance();
        Self {
            r: gray + (self.r - gray) * factor,
            g: gray + (self.g - gray) * factor,
            b: gray + (self.b - gray) * factor,
            a: self.a,
        }
    }

    /// Adds `delta` to every RGB channel (dithering offset). Alpha is
    /// unchanged and no clamping is applied.
    #[inline]
    pub fn offset_rgb(self, delta: f32) -> Self {
        Self {
            r: self.r + delta,
            g: self.g + delta,
            b: self.b + delta,
            a: self.a,
        }
    }

    /// Composites `bg` under `self`: `self + bg * (1 - self.a)`.
    #[inline]
    pub fn under(self, bg: Color) -> Self {
        let inv = 1.0 - self.a;
        Self {
            r: self.r + bg.r * inv,
            g: self.g + bg.g * inv,
            b: self.b + bg.b * inv,
            a: self.a + bg.a * inv,
        }
    }

    /// Multiplies all four channels by `factor` (coverage or opacity).
    #[inline]
    pub fn mul_alpha(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a * factor,
        }
    }

    /// Forces alpha to 1.0, keeping RGB (treat the source as opaque).
    #[inline]
    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to [0, 1] and enforces premultiplication.
    #[inline]
    pub fn clamped(self) -> Self {
        let a = self.a.clamp(0.0, 1.0);

        // Clamp premultiplied rgb so it cannot exceed alpha.
        let r = self.r.clamp(0.0, a);
        let g = self.g.clamp(0.0, a);
        let b = self.b.clamp(0.0, a);

        Self { r, g, b, a }
    }

    /// Channel array, GPU upload form.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Channel-wise sum. Meaningful for premultiplied colors (compositing terms
/// are added channel-wise).
impl Add for Color {
    type Output = Color;
    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}
