/// Straight-alpha RGBA color.
///
/// Components are `f32` in `[0, 1]`. This program does no blending, so
/// premultiplication is not an invariant here; values are passed to the GPU
/// as-is (widened to `f64` for clear operations).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color shorthand (`a = 1.0`).
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Converts to the `f64` color wgpu expects for clear values.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_sets_full_alpha() {
        let c = Color::opaque(0.2, 0.4, 0.6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn to_wgpu_widens_components() {
        let c = Color::rgba(1.0, 0.0, 0.25, 1.0);
        let w = c.to_wgpu();
        assert_eq!(w.r, 1.0);
        assert_eq!(w.g, 0.0);
        assert_eq!(w.b, 0.25);
        assert_eq!(w.a, 1.0);
    }
}
