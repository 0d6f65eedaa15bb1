//! GPU runtime for scrim surface effects.
//!
//! This crate owns the wgpu pieces: a headless device, offscreen targets,
//! and the clipped-surface render pass whose WGSL fragment shader is the
//! twin of the CPU math in `scrim-frag`.

pub mod device;
pub mod logging;
pub mod render;
