use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Presents a fatal error message to the user.
///
/// Implementations are shared through `Failure` clones, and those clones
/// live inside the device callbacks, which wgpu requires to be `Send`.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str);
}

/// Writes failures to the log at error level.
///
/// Used when no UI context is available (headless runs, CI).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ErrorReporter for ConsoleReporter {
    fn report(&self, message: &str) {
        log::error!("{message}");
    }
}

type Presenter = dyn Fn(&str, &str) + Send + Sync;

/// Shows failures in a blocking modal dialog.
///
/// Only one dialog is visible at a time. A report that arrives while a dialog
/// is open is logged but not shown, so the user sees the first error rather
/// than the most recent one.
pub struct DialogReporter {
    title: String,
    open: AtomicBool,
    present: Box<Presenter>,
}

impl DialogReporter {
    /// Native message box (`rfd`) with a single OK button.
    #[cfg(feature = "dialog")]
    pub fn native(title: impl Into<String>) -> Self {
        Self::with_presenter(title, |title, message| {
            let _ = rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(title)
                .set_description(message)
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        })
    }

    /// Dialog reporter backed by a custom presenter.
    ///
    /// `present(title, message)` must block until the dialog is dismissed.
    pub fn with_presenter<F>(title: impl Into<String>, present: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            open: AtomicBool::new(false),
            present: Box::new(present),
        }
    }

    /// Returns `true` while a dialog is on screen.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

impl ErrorReporter for DialogReporter {
    fn report(&self, message: &str) {
        // Mirror to the console regardless of the dialog state.
        log::error!("{message}");

        if self
            .open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("error dialog already open; not showing the newer error");
            return;
        }

        (self.present)(&self.title, message);
        self.open.store(false, Ordering::Release);
    }
}

/// Picks the reporter for the current host.
///
/// A dialog is used when `prefer_dialog` is set, the `dialog` feature is
/// compiled in and a display is reachable; otherwise failures go to the log.
pub fn default_reporter(prefer_dialog: bool) -> Arc<dyn ErrorReporter> {
    #[cfg(feature = "dialog")]
    if prefer_dialog && display_available() {
        return Arc::new(DialogReporter::native("tessera error"));
    }

    #[cfg(not(feature = "dialog"))]
    let _ = prefer_dialog;

    log::debug!("using console error reporter");
    Arc::new(ConsoleReporter)
}

#[cfg(feature = "dialog")]
fn display_available() -> bool {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::thread;

    #[test]
    fn second_report_is_suppressed_while_dialog_is_open() {
        let (shown_tx, shown_rx) = mpsc::channel::<String>();
        let (dismiss_tx, dismiss_rx) = mpsc::channel::<()>();
        let dismiss_rx = Mutex::new(dismiss_rx);

        let reporter = Arc::new(DialogReporter::with_presenter("test", move |_, message| {
            let _ = shown_tx.send(message.to_string());
            if let Ok(rx) = dismiss_rx.lock() {
                let _ = rx.recv();
            }
        }));

        let first = {
            let reporter = Arc::clone(&reporter);
            thread::spawn(move || reporter.report("first"))
        };

        assert_eq!(shown_rx.recv().unwrap(), "first");
        assert!(reporter.is_open());

        // Returns immediately: the first dialog is still up.
        reporter.report("second");
        assert!(shown_rx.try_recv().is_err());

        dismiss_tx.send(()).unwrap();
        first.join().unwrap();
        assert!(!reporter.is_open());

        // Once dismissed, the next failure is shown again.
        let third = {
            let reporter = Arc::clone(&reporter);
            thread::spawn(move || reporter.report("third"))
        };
        assert_eq!(shown_rx.recv().unwrap(), "third");
        dismiss_tx.send(()).unwrap();
        third.join().unwrap();
    }

    #[test]
    fn presenter_receives_title_and_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let reporter = DialogReporter::with_presenter("tessera error", move |title, message| {
            sink.lock().unwrap().push(format!("{title}: {message}"));
        });

        reporter.report("boom");

        assert_eq!(*seen.lock().unwrap(), vec!["tessera error: boom".to_string()]);
    }

    #[test]
    fn console_reporter_is_the_fallback() {
        // Without a dialog preference the console is always chosen; reporting
        // must not block or panic.
        let reporter = default_reporter(false);
        reporter.report("console only");
    }
}
