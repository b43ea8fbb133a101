//! Passive device observers.
//!
//! Neither observer tries to recover: both route into the shared
//! [`Failure`] path, which reports once and halts the frame loop.

use std::sync::Arc;

use crate::error::RenderError;
use crate::report::Failure;

/// Installs the device-lost callback and the uncaptured-error handler.
pub(crate) fn install(device: &wgpu::Device, failure: &Failure) {
    let lost = failure.clone();
    device.set_device_lost_callback(move |reason, message| {
        device_lost(&lost, reason, message);
    });

    let uncaptured = failure.clone();
    device.on_uncaptured_error(Arc::new(move |error: wgpu::Error| {
        uncaptured_error(&uncaptured, &error);
    }));
}

pub(crate) fn device_lost(failure: &Failure, reason: wgpu::DeviceLostReason, message: String) {
    // `Destroyed` only follows our own teardown.
    if matches!(reason, wgpu::DeviceLostReason::Destroyed) {
        log::debug!("device destroyed: {message}");
        return;
    }

    let _ = failure.fail(RenderError::DeviceLost {
        reason: reason_label(reason).to_string(),
        message,
    });
}

pub(crate) fn uncaptured_error(failure: &Failure, error: &wgpu::Error) {
    let _ = failure.fail(RenderError::UncapturedDeviceError {
        message: error.to_string(),
    });
}

fn reason_label(reason: wgpu::DeviceLostReason) -> &'static str {
    match reason {
        wgpu::DeviceLostReason::Destroyed => "destroyed",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::testing::RecordingReporter;

    #[test]
    fn unknown_loss_halts_and_reports() {
        let reporter = Arc::new(RecordingReporter::default());
        let failure = Failure::new(reporter.clone());

        device_lost(&failure, wgpu::DeviceLostReason::Unknown, "driver reset".to_string());

        assert!(failure.is_halted());
        assert_eq!(reporter.messages(), vec!["Device lost (\"unknown\"):\ndriver reset".to_string()]);
    }

    #[test]
    fn destroyed_device_is_not_a_failure() {
        let reporter = Arc::new(RecordingReporter::default());
        let failure = Failure::new(reporter.clone());

        device_lost(&failure, wgpu::DeviceLostReason::Destroyed, String::new());

        assert!(!failure.is_halted());
        assert!(reporter.messages().is_empty());
    }

    #[test]
    fn uncaptured_validation_error_halts_and_reports() {
        let reporter = Arc::new(RecordingReporter::default());
        let failure = Failure::new(reporter.clone());
        let error = wgpu::Error::Validation {
            source: Box::new(std::io::Error::other("cube arrays unsupported")),
            description: "bad view".to_string(),
        };

        uncaptured_error(&failure, &error);

        assert!(failure.is_halted());
        assert_eq!(reporter.messages(), vec!["Uncaptured error:\nbad view".to_string()]);
    }
}
