//! Color model shared between the CPU fragment routines and the GPU path.
//!
//! Everything is linear premultiplied alpha. Compositing a background under
//! a foreground is always `fg + bg * (1 - fg.a)`.

mod color;

pub use color::Color;
