//! The per-fragment routines.
//!
//! Three pure functions, composed the way a fragment-shader `main` would:
//! [`shade`] maps the input coordinate into geometry space, samples the
//! source, runs [`postprocess`], hard-clips outside geometry, and applies
//! [`rounding_alpha`] coverage plus the global alpha.
//!
//! Every invocation is independent per pixel per frame; there is no shared
//! mutable state. Inputs are trusted (no validation, see crate docs).

mod postprocess;
mod rounding;
mod surface;

pub use postprocess::{PostProcess, interleaved_gradient_noise, postprocess};
pub use rounding::{rounding_alpha, smoothstep};
pub use surface::{SurfaceParams, SurfaceSource, shade};
