use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::RenderError;

use super::ErrorReporter;

/// Shared fail-and-halt handle.
///
/// Cloning is cheap; all clones share one reporter and one halt latch. Once
/// any clone fails, [`is_halted`](Self::is_halted) stays `true` for all of
/// them and the render loop stops submitting work.
#[derive(Clone)]
pub struct Failure {
    reporter: Arc<dyn ErrorReporter>,
    halted: Arc<AtomicBool>,
}

impl Failure {
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            reporter,
            halted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Latches the halt flag, reports `err` and hands it back for `?`.
    ///
    /// The latch is set before the reporter runs: a blocking dialog must not
    /// leave the frame loop drawing behind it.
    pub fn fail(&self, err: RenderError) -> RenderError {
        let first = !self.halted.swap(true, Ordering::AcqRel);
        if first {
            log::debug!("render loop halted");
        }
        self.reporter.report(&err.to_string());
        err
    }

    pub fn is_halted(&self) -> bool {
        self.halted.load(Ordering::Acquire)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("halted", &self.is_halted())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::testing::RecordingReporter;

    #[test]
    fn fail_reports_and_latches() {
        let reporter = Arc::new(RecordingReporter::default());
        let failure = Failure::new(reporter.clone());
        assert!(!failure.is_halted());

        let err = failure.fail(RenderError::AdapterUnavailable);

        assert_eq!(err, RenderError::AdapterUnavailable);
        assert!(failure.is_halted());
        assert_eq!(reporter.messages(), vec![RenderError::AdapterUnavailable.to_string()]);
    }

    #[test]
    fn clones_share_the_latch() {
        let failure = Failure::new(Arc::new(RecordingReporter::default()));
        let observer = failure.clone();

        let _ = failure.fail(RenderError::SurfaceOutOfMemory);

        assert!(observer.is_halted());
    }

    #[test]
    fn latch_survives_across_threads() {
        let reporter = Arc::new(RecordingReporter::default());
        let failure = Failure::new(reporter.clone());
        let remote = failure.clone();

        std::thread::spawn(move || {
            let _ = remote.fail(RenderError::DeviceLost {
                reason: "unknown".to_string(),
                message: "reset".to_string(),
            });
        })
        .join()
        .unwrap();

        assert!(failure.is_halted());
        assert_eq!(reporter.messages().len(), 1);
    }
}
