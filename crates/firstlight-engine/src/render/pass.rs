use crate::frame::FrameDesc;
use crate::render::quad::QuadRenderer;
use crate::render::RenderTarget;

/// Records the frame's single render pass into `target`.
///
/// The pass clears to `desc.clear` and, when both a draw call and a prepared
/// renderer exist, binds the pipeline and vertex buffer and issues the draw.
/// The pass is closed when the guard drops; no commands can be added after.
pub fn render_frame(target: &mut RenderTarget<'_>, desc: &FrameDesc, quad: Option<&QuadRenderer>) {
    let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("firstlight frame pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(desc.clear.to_wgpu()),
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });

    if let (Some(call), Some(quad)) = (desc.draw, quad) {
        quad.record(&mut rpass, call);
    }
}
