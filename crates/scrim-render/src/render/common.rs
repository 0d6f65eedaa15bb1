//! Shared GPU types and utilities for the render passes.

use bytemuck::{Pod, Zeroable};
use scrim_frag::coords::Mat3;

// ── blend ─────────────────────────────────────────────────────────────────

/// Premultiplied-alpha over blending (`One`, `OneMinusSrcAlpha`).
pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── mat3 packing ──────────────────────────────────────────────────────────

/// Packs a [`Mat3`] into the vec4-aligned column layout WGSL uses for
/// `mat3x3<f32>` in uniform buffers (each column padded to 16 bytes).
pub(super) fn mat3_to_columns(m: Mat3) -> [[f32; 4]; 3] {
    let a = m.to_cols_array();
    [
        [a[0], a[1], a[2], 0.0],
        [a[3], a[4], a[5], 0.0],
        [a[6], a[7], a[8], 0.0],
    ]
}

// ── non-zero binding size ─────────────────────────────────────────────────

/// Minimum binding size for a uniform struct `T`.
///
/// Centralised so pipeline-creation sites stay free of `.unwrap()`.
pub(super) fn min_binding_size<T>() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
        .expect("uniform struct has non-zero size by construction")
}
