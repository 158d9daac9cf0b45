//! GPU rendering subsystem.
//!
//! Consumes a [`crate::frame::FrameDesc`] and issues GPU commands via wgpu.
//! Geometry is authored directly in clip space, so no viewport transform or
//! bind groups are involved.

mod ctx;
mod pass;
pub mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use pass::render_frame;
pub use quad::QuadRenderer;
