//! The clipped-surface render pass.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use scrim_frag::coords::{Rect, Viewport};
use scrim_frag::frag::SurfaceParams;

use super::common::{
    QUAD_INDICES, QUAD_VERTICES, QuadVertex, mat3_to_columns, min_binding_size,
    premul_alpha_blend,
};
use super::{RenderCtx, RenderTarget};

/// Renderer for one post-processed, clipped, corner-rounded surface.
///
/// The WGSL fragment stage mirrors `scrim_frag::frag::shade` step for step:
/// geometry mapping, source sampling, optional opaque-source override,
/// post-processing, hard clip, rounding coverage, global alpha, optional
/// diagnostic tint.
pub struct ClippedSurfaceRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,
    params_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
}

impl Default for ClippedSurfaceRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            sampler: None,
            params_ubo: None,
            quad_vbo: None,
            quad_ibo: None,
        }
    }
}

impl ClippedSurfaceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `source_view` into `dst` (logical pixels) with the given
    /// surface parameters.
    ///
    /// One draw per surface: the parameter uniform is rewritten each call,
    /// so batch ordering is the caller's responsibility.
    pub fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        source_view: &wgpu::TextureView,
        dst: Rect,
        params: &SurfaceParams,
    ) {
        let dst = dst.normalized();
        if dst.is_empty() || !ctx.viewport.is_valid() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_sampler(ctx);
        self.ensure_params_ubo(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return; };
        let Some(bgl) = self.bind_group_layout.as_ref() else { return; };
        let Some(sampler) = self.sampler.as_ref() else { return; };
        let Some(params_ubo) = self.params_ubo.as_ref() else { return; };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return; };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return; };

        let uniforms = SurfaceUniforms::new(params, dst, ctx.viewport);
        ctx.queue.write_buffer(params_ubo, 0, bytemuck::bytes_of(&uniforms));

        // The source view changes per draw, so the bind group is rebuilt
        // rather than cached.
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scrim surface bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: params_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(source_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scrim surface pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..6, 0, 0..1);
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.target_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scrim surface shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("shaders/clipped_surface.wgsl").into(),
            ),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scrim surface bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(min_binding_size::<SurfaceUniforms>()),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scrim surface pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("scrim surface pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.target_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.target_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.params_ubo = None;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }
        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scrim surface quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scrim surface quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("scrim surface sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    fn ensure_params_ubo(&mut self, ctx: &RenderCtx<'_>) {
        if self.params_ubo.is_some() {
            return;
        }
        self.params_ubo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scrim surface params ubo"),
            size: std::mem::size_of::<SurfaceUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Flag bits of [`SurfaceUniforms::flags`].
const FLAG_OPAQUE_SOURCE: u32 = 1;
const FLAG_DEBUG_TINT: u32 = 1 << 1;

/// Uniform block layout (144 bytes, WGSL `SurfaceUniforms`):
///
///  offset   0  input_to_geo   mat3x3<f32> (vec4-padded columns)
///  offset  48  dst_origin     vec2<f32>   (logical px)
///  offset  56  dst_size       vec2<f32>
///  offset  64  viewport       vec2<f32>
///  offset  72  geo_size       vec2<f32>
///  offset  80  corner_radius  vec4<f32>   (tl, tr, br, bl)
///  offset  96  bg_color       vec4<f32>   (premultiplied)
///  offset 112  scale          f32
///  offset 116  alpha          f32
///  offset 120  saturation     f32
///  offset 124  noise          f32
///  offset 128  flags          u32
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SurfaceUniforms {
    input_to_geo: [[f32; 4]; 3],
    dst_origin: [f32; 2],
    dst_size: [f32; 2],
    viewport: [f32; 2],
    geo_size: [f32; 2],
    corner_radius: [f32; 4],
    bg_color: [f32; 4],
    scale: f32,
    alpha: f32,
    saturation: f32,
    noise: f32,
    flags: u32,
    _pad: [u32; 3],
}

impl SurfaceUniforms {
    fn new(params: &SurfaceParams, dst: Rect, viewport: Viewport) -> Self {
        let r = params.corner_radius;
        let mut flags = 0;
        if params.opaque_source {
            flags |= FLAG_OPAQUE_SOURCE;
        }
        if params.debug_tint {
            flags |= FLAG_DEBUG_TINT;
        }

        Self {
            input_to_geo: mat3_to_columns(params.input_to_geo),
            dst_origin: [dst.origin.x, dst.origin.y],
            dst_size: [dst.size.x, dst.size.y],
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            geo_size: [params.geo_size.x, params.geo_size.y],
            corner_radius: [r.top_left, r.top_right, r.bottom_right, r.bottom_left],
            bg_color: params.post.background.to_array(),
            scale: params.scale,
            alpha: params.alpha,
            saturation: params.post.saturation,
            noise: params.post.noise,
            flags,
            _pad: [0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_frag::coords::{CornerRadii, Vec2};
    use scrim_frag::frag::PostProcess;
    use scrim_frag::paint::Color;

    fn uniforms(params: &SurfaceParams) -> SurfaceUniforms {
        SurfaceUniforms::new(params, Rect::new(10.0, 20.0, 30.0, 40.0), Viewport::new(800.0, 600.0))
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn uniform_block_is_wgsl_sized() {
        // Must match the WGSL struct: 144 bytes, 16-byte aligned tail.
        assert_eq!(std::mem::size_of::<SurfaceUniforms>(), 144);
        assert_eq!(std::mem::size_of::<SurfaceUniforms>() % 16, 0);
    }

    // ── packing ───────────────────────────────────────────────────────────

    #[test]
    fn corner_radii_keep_css_order() {
        let params = SurfaceParams {
            corner_radius: CornerRadii::new(1.0, 2.0, 3.0, 4.0),
            ..Default::default()
        };
        assert_eq!(uniforms(&params).corner_radius, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn flags_encode_both_modes() {
        let plain = uniforms(&SurfaceParams::default());
        assert_eq!(plain.flags, 0);

        let both = uniforms(&SurfaceParams {
            opaque_source: true,
            debug_tint: true,
            ..Default::default()
        });
        assert_eq!(both.flags, FLAG_OPAQUE_SOURCE | FLAG_DEBUG_TINT);
    }

    #[test]
    fn post_params_are_forwarded() {
        let params = SurfaceParams {
            post: PostProcess {
                saturation: 0.5,
                noise: 0.1,
                background: Color::from_premul(0.0, 0.0, 0.5, 0.5),
            },
            scale: 2.0,
            alpha: 0.75,
            ..Default::default()
        };
        let u = uniforms(&params);
        assert_eq!(u.saturation, 0.5);
        assert_eq!(u.noise, 0.1);
        assert_eq!(u.bg_color, [0.0, 0.0, 0.5, 0.5]);
        assert_eq!(u.scale, 2.0);
        assert_eq!(u.alpha, 0.75);
    }

    #[test]
    fn dst_and_viewport_are_forwarded() {
        let u = uniforms(&SurfaceParams::default());
        assert_eq!(u.dst_origin, [10.0, 20.0]);
        assert_eq!(u.dst_size, [30.0, 40.0]);
        assert_eq!(u.viewport, [800.0, 600.0]);
    }
}
