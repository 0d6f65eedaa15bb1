use crate::coords::{CornerRadii, Mat3, Vec2};
use crate::paint::Color;

use super::postprocess::{PostProcess, postprocess};
use super::rounding::rounding_alpha;

/// Fixed translucent tint blended in when [`SurfaceParams::debug_tint`] is
/// set. Diagnostic only.
const DEBUG_TINT: Color = Color::from_premul(0.0, 0.2, 0.0, 0.2);

/// Source of premultiplied colors sampled at normalized [0,1]×[0,1]
/// coordinates.
///
/// This is the texture seam: the GPU path binds a real texture, the CPU
/// path samples a [`Pixmap`](crate::raster::Pixmap) or a closure.
pub trait SurfaceSource {
    fn sample(&self, uv: Vec2) -> Color;
}

impl<F: Fn(Vec2) -> Color> SurfaceSource for F {
    #[inline]
    fn sample(&self, uv: Vec2) -> Color {
        self(uv)
    }
}

/// Per-draw parameters for [`shade`], one field per uniform the surrounding
/// pipeline supplies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceParams {
    /// Input coordinate space → geometry space ([0,1]² over the surface
    /// rectangle).
    pub input_to_geo: Mat3,
    /// Geometry rectangle size, scaled pixel units.
    pub geo_size: Vec2,
    /// Corner radii in the same units as `geo_size` (TL, TR, BR, BL).
    pub corner_radius: CornerRadii,
    /// Logical-to-device pixel factor; sizes the corner anti-aliasing band.
    pub scale: f32,
    /// Global opacity multiplier in [0, 1].
    pub alpha: f32,
    /// Saturation / noise / background stage.
    pub post: PostProcess,
    /// Treat the source as fully opaque: force sampled alpha to 1.0 before
    /// post-processing.
    pub opaque_source: bool,
    /// Blend the fixed diagnostic tint into the final color.
    pub debug_tint: bool,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            input_to_geo: Mat3::IDENTITY,
            geo_size: Vec2::splat(1.0),
            corner_radius: CornerRadii::zero(),
            scale: 1.0,
            alpha: 1.0,
            post: PostProcess::default(),
            opaque_source: false,
            debug_tint: false,
        }
    }
}

impl SurfaceParams {
    /// Shrinks `corner_radius` so adjacent corners cannot overlap inside
    /// `geo_size` (CSS corner-overlap rule).
    ///
    /// Without this, oversized radii fall back to the fixed corner
    /// evaluation order of [`rounding_alpha`].
    pub fn fit_radius(&mut self) {
        self.corner_radius = self.corner_radius.fit_to(self.geo_size.x, self.geo_size.y);
    }
}

/// Computes the final output color for one fragment.
///
/// `coords` is the interpolated input coordinate; `frag_px` is the
/// fragment's framebuffer position in device pixels (the dither seed).
///
/// Order of operations:
/// 1. map `coords` into geometry space,
/// 2. sample the source at the untransformed `coords`,
/// 3. optionally force the source opaque,
/// 4. post-process (saturation, noise, background),
/// 5. hard-clip to geometry (after post-processing, so the background does
///    not bleed outside),
/// 6. apply rounded-corner coverage at the geometry-space pixel position,
/// 7. apply the global alpha,
/// 8. optionally blend the diagnostic tint.
pub fn shade(
    coords: Vec2,
    frag_px: Vec2,
    source: &impl SurfaceSource,
    params: &SurfaceParams,
) -> Color {
    let geo = params.input_to_geo.transform_point(coords);

    let mut color = source.sample(coords);
    if params.opaque_source {
        color = color.opaque();
    }

    color = postprocess(color, frag_px, &params.post);

    if geo.x < 0.0 || 1.0 < geo.x || geo.y < 0.0 || 1.0 < geo.y {
        color = Color::transparent();
    } else {
        let geo_px = geo * params.geo_size;
        color = color.mul_alpha(rounding_alpha(
            geo_px,
            params.geo_size,
            params.corner_radius,
            params.scale,
        ));
    }

    color = color.mul_alpha(params.alpha);

    if params.debug_tint {
        color = color.mul_alpha(0.8) + DEBUG_TINT;
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(color: Color) -> impl SurfaceSource {
        move |_uv: Vec2| color
    }

    fn shade_at(x: f32, y: f32, params: &SurfaceParams) -> Color {
        shade(
            Vec2::new(x, y),
            Vec2::new(x * 100.0, y * 100.0),
            &solid(Color::from_premul(0.5, 0.25, 0.0, 0.5)),
            params,
        )
    }

    // ── pass-through ──────────────────────────────────────────────────────

    #[test]
    fn identity_params_pass_the_source_through() {
        let out = shade_at(0.5, 0.5, &SurfaceParams::default());
        assert_eq!(out, Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn global_alpha_scales_output() {
        let params = SurfaceParams { alpha: 0.5, ..Default::default() };
        let out = shade_at(0.5, 0.5, &params);
        assert_eq!(out, Color::from_premul(0.25, 0.125, 0.0, 0.25));
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn outside_geometry_is_transparent_black() {
        // Shrink geometry to the middle half of the input space: inputs
        // outside [0.25, 0.75] map outside [0,1].
        let params = SurfaceParams {
            input_to_geo: Mat3::from_scale(Vec2::splat(2.0))
                * Mat3::from_translation(Vec2::splat(-0.25)),
            ..Default::default()
        };
        for (x, y) in [(0.1, 0.5), (0.9, 0.5), (0.5, 0.1), (0.5, 0.9)] {
            assert_eq!(shade_at(x, y, &params), Color::transparent(), "at ({x}, {y})");
        }
        assert_ne!(shade_at(0.5, 0.5, &params), Color::transparent());
    }

    #[test]
    fn clip_beats_background_compositing() {
        // The background is composited in post-processing, but outside the
        // geometry the output must still be fully transparent.
        let params = SurfaceParams {
            input_to_geo: Mat3::from_translation(Vec2::new(-0.5, 0.0)),
            post: PostProcess {
                background: Color::from_premul(1.0, 1.0, 1.0, 1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(shade_at(0.25, 0.5, &params), Color::transparent());
    }

    // ── source flags ──────────────────────────────────────────────────────

    #[test]
    fn opaque_source_forces_alpha_before_compositing() {
        // With the source forced opaque, an opaque background must not
        // leak through at all.
        let params = SurfaceParams {
            opaque_source: true,
            post: PostProcess {
                background: Color::from_premul(0.0, 1.0, 0.0, 1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let out = shade_at(0.5, 0.5, &params);
        assert_eq!(out, Color::from_premul(0.5, 0.25, 0.0, 1.0));
    }

    // ── rounding ──────────────────────────────────────────────────────────

    #[test]
    fn corners_are_masked_and_body_kept() {
        let params = SurfaceParams {
            geo_size: Vec2::new(100.0, 100.0),
            corner_radius: CornerRadii::all(10.0),
            ..Default::default()
        };
        // Fragment at the very top-left of geometry: fully masked.
        assert_eq!(shade_at(0.001, 0.001, &params), Color::transparent());
        // Center: untouched.
        assert_eq!(shade_at(0.5, 0.5, &params), Color::from_premul(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn fit_radius_clamps_to_geometry() {
        let mut params = SurfaceParams {
            geo_size: Vec2::new(100.0, 50.0),
            corner_radius: CornerRadii::all(100.0),
            ..Default::default()
        };
        params.fit_radius();
        assert_eq!(params.corner_radius, CornerRadii::all(25.0));
    }

    // ── debug tint ────────────────────────────────────────────────────────

    #[test]
    fn debug_tint_is_a_fixed_blend() {
        let plain = SurfaceParams::default();
        let tinted = SurfaceParams { debug_tint: true, ..plain };
        let base = shade_at(0.5, 0.5, &plain);
        let out = shade_at(0.5, 0.5, &tinted);
        assert_eq!(out.r, base.r * 0.8);
        assert_eq!(out.g, base.g * 0.8 + 0.2);
        assert_eq!(out.b, base.b * 0.8);
        assert_eq!(out.a, base.a * 0.8 + 0.2);
    }
}
