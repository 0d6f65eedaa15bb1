//! GPU rendering subsystem.
//!
//! The clipped-surface renderer consumes per-draw [`SurfaceParams`] and
//! issues GPU commands via wgpu, owning its own resources (pipeline,
//! buffers, sampler).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.
//!
//! [`SurfaceParams`]: scrim_frag::frag::SurfaceParams

mod common;
mod ctx;
pub mod surface;

pub use ctx::{RenderCtx, RenderTarget};
pub use surface::ClippedSurfaceRenderer;
