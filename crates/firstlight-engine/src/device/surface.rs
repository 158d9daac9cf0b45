pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(formats[0])
}

pub(crate) fn choose_alpha_mode(
    alpha_modes: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| alpha_modes.contains(m))
        .or_else(|| alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::CompositeAlphaMode as Alpha;
    use wgpu::TextureFormat as Fmt;

    // ── choose_surface_format ─────────────────────────────────────────────

    #[test]
    fn prefers_bgra_srgb_when_present() {
        let formats = [Fmt::Rgba8Unorm, Fmt::Bgra8UnormSrgb, Fmt::Rgba8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(Fmt::Bgra8UnormSrgb)
        );
    }

    #[test]
    fn falls_back_to_rgba_srgb() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(
            choose_surface_format(&formats, true),
            Some(Fmt::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn uses_first_format_when_no_srgb_available() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8Unorm];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Bgra8Unorm));
    }

    #[test]
    fn uses_first_format_when_srgb_not_preferred() {
        let formats = [Fmt::Rgba8Unorm, Fmt::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Rgba8Unorm));
    }

    #[test]
    fn empty_capability_set_yields_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── choose_alpha_mode ─────────────────────────────────────────────────

    #[test]
    fn honors_supported_request() {
        let modes = [Alpha::Opaque, Alpha::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&modes, Some(Alpha::PreMultiplied)),
            Alpha::PreMultiplied
        );
    }

    #[test]
    fn unsupported_request_falls_back_to_first() {
        let modes = [Alpha::Opaque];
        assert_eq!(
            choose_alpha_mode(&modes, Some(Alpha::PostMultiplied)),
            Alpha::Opaque
        );
    }

    #[test]
    fn empty_modes_yield_auto() {
        assert_eq!(choose_alpha_mode(&[], None), Alpha::Auto);
    }
}
