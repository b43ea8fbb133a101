use tessera_engine::core::{App, AppControl, FrameCtx};
use tessera_engine::device::Gpu;
use tessera_engine::error::RenderError;
use tessera_engine::render::triangle::{FrameOutcome, FrameRenderer, TriangleConfig};
use tessera_engine::report::Failure;

/// Glue between the runtime callbacks and the triangle renderer.
pub struct TriangleDemo {
    config: TriangleConfig,
    renderer: Option<FrameRenderer>,
    halt_logged: bool,
}

impl TriangleDemo {
    pub fn new(config: TriangleConfig) -> Self {
        Self {
            config,
            renderer: None,
            halt_logged: false,
        }
    }
}

impl App for TriangleDemo {
    fn on_init(&mut self, gpu: &Gpu<'_>, failure: &Failure) -> Result<(), RenderError> {
        self.renderer = Some(FrameRenderer::new(gpu, self.config.clone(), failure.clone())?);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Continue;
        };

        match renderer.advance_and_draw(ctx) {
            FrameOutcome::Drawn => {}
            FrameOutcome::Skipped => log::trace!("frame {} skipped", ctx.time.frame_index),
            // The window stays open on the last presented frame.
            FrameOutcome::Halted if !self.halt_logged => {
                log::warn!("rendering halted after frame {}", ctx.time.frame_index);
                self.halt_logged = true;
            }
            FrameOutcome::Halted => {}
        }

        AppControl::Continue
    }
}
