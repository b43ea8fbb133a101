//! Terminal error taxonomy for the render path.
//!
//! Every variant is fatal: it is reported once through
//! [`Failure`](crate::report::Failure) and rendering stops. Nothing here is
//! retried or recovered.

/// Errors that end the render loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The host exposes no GPU backend at all.
    #[error("GPU support is not available on this host")]
    CapabilityUnavailable,

    /// Backends exist but none returned an adapter.
    #[error("no suitable GPU adapter was found - this sample can't run on this system")]
    AdapterUnavailable,

    /// An adapter was found but the device request failed.
    #[error("unable to get a device: {0}")]
    DeviceUnavailable(String),

    /// The device was invalidated after initialization.
    #[error("Device lost (\"{reason}\"):\n{message}")]
    DeviceLost { reason: String, message: String },

    /// A driver-level validation error surfaced outside any error scope.
    #[error("Uncaptured error:\n{message}")]
    UncapturedDeviceError { message: String },

    /// The window or its wgpu surface could not be created.
    #[error("failed to create the output surface: {0}")]
    SurfaceCreation(String),

    /// The surface reports no formats usable with the selected adapter.
    #[error("the output surface reports no supported formats")]
    SurfaceUnsupported,

    /// Acquiring the frame target ran out of memory.
    #[error("out of memory while acquiring the frame target")]
    SurfaceOutOfMemory,

    /// A resource descriptor violated one of its stated constraints.
    #[error("invalid {resource} descriptor: {reason}")]
    InvalidDescriptor {
        resource: &'static str,
        reason: String,
    },
}

impl RenderError {
    pub(crate) fn invalid(resource: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            resource,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_lost_message_carries_reason_and_message() {
        let err = RenderError::DeviceLost {
            reason: "unknown".to_string(),
            message: "GPU hung".to_string(),
        };
        assert_eq!(err.to_string(), "Device lost (\"unknown\"):\nGPU hung");
    }

    #[test]
    fn uncaptured_error_message_is_prefixed() {
        let err = RenderError::UncapturedDeviceError {
            message: "bad view dimension".to_string(),
        };
        assert_eq!(err.to_string(), "Uncaptured error:\nbad view dimension");
    }

    #[test]
    fn invalid_descriptor_names_the_resource() {
        let err = RenderError::invalid("buffer", "size must be non-zero");
        assert_eq!(err.to_string(), "invalid buffer descriptor: size must be non-zero");
    }
}
