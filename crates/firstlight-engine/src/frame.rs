//! Frame content description.
//!
//! The renderer is one configurable path: every frame clears, and optionally
//! draws the fixed quad geometry on top. The draw call is carried as plain
//! data so callers (and tests) can inspect exactly what will be issued.

use crate::paint::Color;
use crate::render::quad;

/// A single non-indexed draw call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub vertices: u32,
    pub instances: u32,
}

/// Describes the one frame this program renders.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameDesc {
    /// Color the render pass clears to before any draw.
    pub clear: Color,

    /// Optional draw step; `None` means the frame is a flat clear.
    pub draw: Option<DrawCall>,
}

impl FrameDesc {
    /// Clear-only frame: the pass clears to `clear` and ends with no draw.
    pub fn clear_only(clear: Color) -> Self {
        Self { clear, draw: None }
    }

    /// Full frame: red clear overpainted by the quad geometry, drawn twice
    /// with the per-instance vertical offset applied in the vertex shader.
    pub fn full() -> Self {
        Self {
            clear: Color::opaque(1.0, 0.0, 0.0),
            draw: Some(quad::draw_call()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_frame_draws_six_vertices_twice() {
        let desc = FrameDesc::full();
        assert_eq!(
            desc.draw,
            Some(DrawCall {
                vertices: 6,
                instances: 2,
            })
        );
    }

    #[test]
    fn full_frame_clears_to_opaque_red() {
        assert_eq!(FrameDesc::full().clear, Color::rgba(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn clear_only_frame_has_no_draw() {
        let desc = FrameDesc::clear_only(Color::opaque(0.0, 0.0, 1.0));
        assert_eq!(desc.draw, None);
        assert_eq!(desc.clear, Color::opaque(0.0, 0.0, 1.0));
    }
}
