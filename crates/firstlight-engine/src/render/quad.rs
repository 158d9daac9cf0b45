//! Quad geometry and its render pipeline.
//!
//! The geometry is a unit-square half in clip space: two triangles, six
//! 2D positions, uploaded once and never resized. The vertex shader stacks a
//! copy of it per instance below the first.

use bytemuck::{Pod, Zeroable};

use crate::frame::DrawCall;
use crate::render::RenderCtx;

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub const VERTICES: [Vertex; 6] = [
    Vertex { pos: [0.5, 0.5] },
    Vertex { pos: [0.5, 0.0] },
    Vertex { pos: [0.0, 0.0] },
    Vertex { pos: [0.5, 0.5] },
    Vertex { pos: [0.0, 0.0] },
    Vertex { pos: [0.0, 0.5] },
];

/// Number of stacked copies the vertex shader offsets per instance.
pub const INSTANCE_COUNT: u32 = 2;

/// The draw call this geometry produces.
pub fn draw_call() -> DrawCall {
    DrawCall {
        vertices: VERTICES.len() as u32,
        instances: INSTANCE_COUNT,
    }
}

/// Owns the vertex buffer and the pipeline that draws it.
///
/// Both are created once; the pipeline is immutable and reused for every
/// draw referencing it (here: one).
pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
}

impl QuadRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let contents: &[u8] = bytemuck::cast_slice(&VERTICES);

        // Buffer size must equal the source byte length exactly.
        let vertex_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("firstlight quad vbo"),
            size: contents.len() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        ctx.queue.write_buffer(&vertex_buffer, 0, contents);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("firstlight quad shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
        });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("firstlight quad pipeline"),
                // No textures or uniforms; let wgpu derive the layout from
                // shader reflection.
                layout: None,

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: None,
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

        Self {
            pipeline,
            vertex_buffer,
        }
    }

    /// Records the draw into an open render pass.
    pub fn record(&self, rpass: &mut wgpu::RenderPass<'_>, call: DrawCall) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..call.vertices, 0..call.instances);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn quad_is_six_vertices() {
        assert_eq!(VERTICES.len(), 6);
    }

    #[test]
    fn vertex_data_is_48_bytes() {
        assert_eq!(std::mem::size_of_val(&VERTICES), 48);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&VERTICES).len(), 48);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_stride_is_two_floats() {
        assert_eq!(Vertex::layout().array_stride, 8);
    }

    #[test]
    fn layout_has_single_position_attribute() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes.len(), 1);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x2);
    }

    // ── draw call ─────────────────────────────────────────────────────────

    #[test]
    fn draw_call_requests_two_instances() {
        let call = draw_call();
        assert_eq!(call.vertices, 6);
        assert_eq!(call.instances, 2);
    }
}
