use thiserror::Error;

/// Fatal GPU setup failures.
///
/// All variants are non-recoverable: setup either runs to completion or
/// aborts at the first failed acquisition step. The display strings are part
/// of the user-facing contract and must stay stable; underlying backend
/// errors are logged at the failure site.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum GpuError {
    /// No compatible physical GPU was found.
    #[error("No adapter found")]
    NoAdapter,

    /// An adapter exists but a logical device could not be created from it.
    #[error("No device found")]
    NoDevice,

    /// The drawable target could not be bound.
    #[error("No context found")]
    NoSurface,

    /// The surface reports no usable pixel formats.
    #[error("no supported surface formats")]
    NoSurfaceFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_message() {
        assert_eq!(GpuError::NoAdapter.to_string(), "No adapter found");
    }

    #[test]
    fn device_message() {
        assert_eq!(GpuError::NoDevice.to_string(), "No device found");
    }

    #[test]
    fn surface_message() {
        assert_eq!(GpuError::NoSurface.to_string(), "No context found");
    }

    #[test]
    fn surface_format_message() {
        assert_eq!(
            GpuError::NoSurfaceFormat.to_string(),
            "no supported surface formats"
        );
    }
}
