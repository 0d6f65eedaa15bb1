use crate::coords::Vec2;
use crate::paint::Color;

/// Post-processing applied to a sampled surface color, premultiplied alpha
/// in and out.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PostProcess {
    /// Saturation multiplier; `1.0` leaves colors unchanged, `0.0` is
    /// grayscale, values above 1 oversaturate.
    pub saturation: f32,
    /// Dithering amplitude added to RGB; `0.0` disables noise.
    pub noise: f32,
    /// Premultiplied background composited under the source.
    pub background: Color,
}

impl Default for PostProcess {
    fn default() -> Self {
        Self {
            saturation: 1.0,
            noise: 0.0,
            background: Color::transparent(),
        }
    }
}

impl PostProcess {
    /// True when every stage is a no-op, so callers can skip the pass.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.saturation == 1.0 && self.noise <= 0.0 && self.background == Color::transparent()
    }
}

/// GLSL-style fract: `x - floor(x)`, always in [0, 1).
#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Interleaved Gradient Noise at a pixel position, in [0, 1).
///
/// Cheap per-pixel pseudo-random value without visible patterning. The
/// input must be a stable per-pixel coordinate (the rasterizer's fragment
/// position), not anything driven by animation progress, or the dither will
/// shimmer.
#[inline]
pub fn interleaved_gradient_noise(pixel: Vec2) -> f32 {
    fract(52.9829189 * fract(pixel.dot(Vec2::new(0.06711056, 0.00583715))))
}

/// Applies saturation, dithering noise, and background under-compositing.
///
/// `pixel` is the fragment's framebuffer position in device pixels, used
/// only to seed the dither.
pub fn postprocess(color: Color, pixel: Vec2, pp: &PostProcess) -> Color {
    let mut color = color;

    if pp.saturation != 1.0 {
        color = color.saturated(pp.saturation);
    }

    if pp.noise > 0.0 {
        let n = (interleaved_gradient_noise(pixel) - 0.5) * pp.noise;
        color = color.offset_rgb(n);
    }

    color.under(pp.background)
}
