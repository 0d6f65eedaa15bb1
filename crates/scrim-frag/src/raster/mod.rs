//! CPU rasterization loop.
//!
//! Evaluates the fragment routines once per target pixel, standing in for
//! the rasterizer of a real pipeline. Useful for reference output and for
//! exercising the exact math the GPU shader runs.

mod pixmap;

pub use pixmap::Pixmap;

use crate::coords::Vec2;
use crate::frag::{SurfaceParams, SurfaceSource, shade};

/// Renders one surface into `target`, invoking [`shade`] at every pixel
/// center.
///
/// The input coordinate spans [0,1]² over the whole target; the fragment
/// position is the device-pixel center, seeding the dither. Invocations are
/// independent per pixel (no ordering guarantees are relied upon).
pub fn render_surface(target: &mut Pixmap, source: &impl SurfaceSource, params: &SurfaceParams) {
    let (w, h) = (target.width(), target.height());
    if w == 0 || h == 0 {
        return;
    }

    let size = Vec2::new(w as f32, h as f32);
    for y in 0..h {
        for x in 0..w {
            let frag_px = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let coords = frag_px / size;
            target.put(x, y, shade(coords, frag_px, source, params));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Mat3};
    use crate::frag::PostProcess;
    use crate::paint::Color;

    const RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);

    fn solid(color: Color) -> impl SurfaceSource {
        move |_uv: Vec2| color
    }

    // ── plain copy ────────────────────────────────────────────────────────

    #[test]
    fn identity_fills_the_target() {
        let mut target = Pixmap::new(4, 4);
        render_surface(&mut target, &solid(RED), &SurfaceParams::default());
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(target.get(x, y), Some(RED));
            }
        }
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn clip_masks_half_the_target() {
        // Geometry covers only the left half of the input space.
        let params = SurfaceParams {
            input_to_geo: Mat3::from_scale(Vec2::new(2.0, 1.0)),
            ..Default::default()
        };
        let mut target = Pixmap::new(8, 2);
        render_surface(&mut target, &solid(RED), &params);
        for x in 0..4 {
            assert_eq!(target.get(x, 0), Some(RED), "left column {x}");
        }
        for x in 4..8 {
            assert_eq!(target.get(x, 0), Some(Color::transparent()), "right column {x}");
        }
    }

    // ── rounding end-to-end ───────────────────────────────────────────────

    #[test]
    fn rounded_corners_mask_the_grid() {
        let params = SurfaceParams {
            geo_size: Vec2::new(16.0, 16.0),
            corner_radius: CornerRadii::all(6.0),
            ..Default::default()
        };
        let mut target = Pixmap::new(16, 16);
        render_surface(&mut target, &solid(RED), &params);

        // Pixel (0,0) center maps to geometry pixel (0.5, 0.5): ~7.8 px
        // from the corner arc center at (6,6), fully masked.
        assert_eq!(target.get(0, 0), Some(Color::transparent()));
        // Body pixels keep the source.
        assert_eq!(target.get(8, 8), Some(RED));
        // Edge midpoints are body too.
        assert_eq!(target.get(8, 0), Some(RED));
    }

    // ── sampling a pixmap source ──────────────────────────────────────────

    #[test]
    fn pixmap_source_is_copied_through() {
        let source = Pixmap::from_fn(4, 4, |x, y| {
            Color::from_premul((x % 2) as f32, (y % 2) as f32, 0.0, 1.0)
        });
        let mut target = Pixmap::new(4, 4);
        render_surface(&mut target, &source, &SurfaceParams::default());
        assert_eq!(target, source);
    }

    // ── post-processing composes ──────────────────────────────────────────

    #[test]
    fn background_fills_transparent_source_inside_geometry_only() {
        let params = SurfaceParams {
            input_to_geo: Mat3::from_scale(Vec2::new(2.0, 1.0)),
            post: PostProcess {
                background: Color::from_premul(0.0, 0.0, 1.0, 1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut target = Pixmap::new(8, 1);
        render_surface(&mut target, &solid(Color::transparent()), &params);
        assert_eq!(target.get(0, 0), Some(Color::from_premul(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(target.get(7, 0), Some(Color::transparent()));
    }
}
