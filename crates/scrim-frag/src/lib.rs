//! Per-pixel surface-effect math for window compositors.
//!
//! Everything here is a pure function over explicit numeric inputs: the
//! rounded-corner coverage, clipping, and post-processing routines a
//! compositor evaluates once per fragment. The GPU twin of this math lives
//! in `scrim-render`.

pub mod coords;
pub mod frag;
pub mod paint;
pub mod raster;
