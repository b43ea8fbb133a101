use winit::event::WindowEvent;

use crate::device::Gpu;
use crate::error::RenderError;
use crate::report::Failure;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the demos.
pub trait App {
    /// Called once, after the GPU context exists and before the first frame.
    ///
    /// An error ends the run; the runtime reports it through `failure`.
    /// `failure` is also the handle renderers keep to halt later frames.
    fn on_init(&mut self, gpu: &Gpu<'_>, failure: &Failure) -> Result<(), RenderError>;

    /// Called for window events.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
