//! Headless GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu adapter/device/queue (no surface)
//! - creating offscreen render targets
//! - uploading premultiplied pixel data as source textures

mod gpu;

pub use gpu::{Gpu, GpuInit, OffscreenTarget};
