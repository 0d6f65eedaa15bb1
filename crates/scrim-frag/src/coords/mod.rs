//! Coordinate and geometry types shared by the fragment routines and the
//! GPU renderers.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Geometry space is the normalized [0,1]×[0,1] square covering a surface's
//! on-screen rectangle; `Mat3` values convert into it.

mod corner_radii;
mod mat3;
mod rect;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use mat3::Mat3;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
