use crate::coords::{CornerRadii, Vec2};

/// Clamped cubic Hermite interpolation: 0 for `x <= edge0`, 1 for
/// `x >= edge1`, a smooth S-curve in between.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Anti-aliased rounded-corner coverage at `coords` inside a `size`
/// rectangle, in [0, 1].
///
/// `coords` and `size` share one unit (scaled pixels); `scale` is the
/// logical-to-device pixel factor, so the smooth transition band at each
/// corner arc is exactly one device pixel wide regardless of scale.
///
/// Corner boxes are tested in fixed order top-left, top-right,
/// bottom-right, bottom-left; when oversized radii make adjacent boxes
/// overlap, the first match wins. Outside every corner box the rectangle
/// body is fully covered.
pub fn rounding_alpha(coords: Vec2, size: Vec2, corner_radius: CornerRadii, scale: f32) -> f32 {
    let (center, radius) = if coords.x < corner_radius.top_left && coords.y < corner_radius.top_left
    {
        (Vec2::splat(corner_radius.top_left), corner_radius.top_left)
    } else if size.x - corner_radius.top_right < coords.x && coords.y < corner_radius.top_right {
        (
            Vec2::new(size.x - corner_radius.top_right, corner_radius.top_right),
            corner_radius.top_right,
        )
    } else if size.x - corner_radius.bottom_right < coords.x
        && size.y - corner_radius.bottom_right < coords.y
    {
        (
            Vec2::new(
                size.x - corner_radius.bottom_right,
                size.y - corner_radius.bottom_right,
            ),
            corner_radius.bottom_right,
        )
    } else if coords.x < corner_radius.bottom_left
        && size.y - corner_radius.bottom_left < coords.y
    {
        (
            Vec2::new(corner_radius.bottom_left, size.y - corner_radius.bottom_left),
            corner_radius.bottom_left,
        )
    } else {
        return 1.0;
    };

    let dist = coords.distance(center);
    let half_px = 0.5 / scale;
    1.0 - smoothstep(radius - half_px, radius + half_px, dist)
}
