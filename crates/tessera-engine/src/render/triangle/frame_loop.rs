use crate::error::RenderError;
use crate::render::{DrawCall, PassSpec};
use crate::report::Failure;

use super::{TriangleConfig, UniformBlock};

/// Rotation state of the animated variants.
///
/// The block handed out for a frame is the one computed after the previous
/// frame, so the very first frame draws with the identity transform.
#[derive(Debug, Clone, Default)]
pub struct TriangleAnimation {
    block: UniformBlock,
}

impl TriangleAnimation {
    pub fn current(&self) -> UniformBlock {
        self.block
    }

    /// Computes the block for the next frame from wall-clock seconds.
    pub fn advance(&mut self, wall_seconds: f64) {
        self.block.set_rotation(wall_seconds);
    }
}

/// Everything one frame will do, decided before touching the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    /// Block to upload before the pass, for animated variants.
    pub uniforms: Option<UniformBlock>,
    pub pass: PassSpec,
    pub draw: DrawCall,
}

/// How a call to `FrameRenderer::advance_and_draw` ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Drawn,
    /// The frame target was not available; the loop keeps going.
    Skipped,
    /// The failure latch is set. Nothing was submitted.
    Halted,
}

/// Headless per-frame state machine.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    animation: Option<TriangleAnimation>,
    pass: PassSpec,
    failure: Failure,
}

impl FrameLoop {
    pub fn new(config: &TriangleConfig, failure: Failure) -> Self {
        Self {
            animation: config.variant.is_animated().then(TriangleAnimation::default),
            pass: PassSpec::default().with_clear(config.clear),
            failure,
        }
    }

    /// The next frame's plan, or `None` once the loop has halted.
    pub fn plan(&self) -> Option<FramePlan> {
        if self.is_halted() {
            return None;
        }

        Some(FramePlan {
            uniforms: self.animation.as_ref().map(TriangleAnimation::current),
            pass: self.pass.clone(),
            draw: DrawCall::TRIANGLE,
        })
    }

    /// Moves the animation on after a frame was handled.
    pub fn advance(&mut self, wall_seconds: f64) {
        if let Some(animation) = self.animation.as_mut() {
            animation.advance(wall_seconds);
        }
    }

    /// Routes a terminal frame error into the shared failure path.
    pub fn fail(&self, err: RenderError) -> RenderError {
        self.failure.fail(err)
    }

    pub fn is_halted(&self) -> bool {
        self.failure.is_halted()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::render::triangle::{Variant, VertexLayout};
    use crate::report::testing::RecordingReporter;

    fn frame_loop(variant: Variant) -> (FrameLoop, Arc<RecordingReporter>) {
        let reporter = Arc::new(RecordingReporter::default());
        let config = TriangleConfig {
            variant,
            ..TriangleConfig::default()
        };
        (FrameLoop::new(&config, Failure::new(reporter.clone())), reporter)
    }

    #[test]
    fn static_variant_writes_no_uniforms() {
        let (fl, _) = frame_loop(Variant::Static);
        let plan = fl.plan().expect("not halted");
        assert_eq!(plan.uniforms, None);
        assert_eq!(plan.draw, DrawCall::TRIANGLE);
    }

    #[test]
    fn first_animated_frame_uses_identity() {
        let (fl, _) = frame_loop(Variant::Rotating);
        assert_eq!(fl.plan().and_then(|p| p.uniforms), Some(UniformBlock::IDENTITY));
    }

    #[test]
    fn uniforms_lag_one_frame_behind_the_clock() {
        let (mut fl, _) = frame_loop(Variant::Rotating);
        fl.advance(std::f64::consts::FRAC_PI_2);

        let block = fl.plan().and_then(|p| p.uniforms).expect("animated");
        let [c, s_neg, s, c2] = block.rotation_block();
        assert!(c.abs() < 1e-6 && c2.abs() < 1e-6);
        assert!((s_neg + 1.0).abs() < 1e-6 && (s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn alpha_is_half_on_every_frame() {
        for variant in [Variant::Rotating, Variant::CompatProbe] {
            let (mut fl, _) = frame_loop(variant);
            for i in 0..10 {
                let plan = fl.plan().expect("not halted");
                assert_eq!(plan.uniforms.map(|u| u.alpha), Some(0.5));
                fl.advance(1_700_000_000.0 + i as f64 * 0.016);
            }
        }
    }

    #[test]
    fn every_variant_and_layout_draws_one_triangle() {
        for variant in [Variant::Static, Variant::Rotating, Variant::CompatProbe] {
            for layout in [VertexLayout::Pos2Color3, VertexLayout::Pos4Color4] {
                let config = TriangleConfig {
                    variant,
                    layout,
                    ..TriangleConfig::default()
                };
                let fl = FrameLoop::new(&config, Failure::new(Arc::new(RecordingReporter::default())));
                let draw = fl.plan().expect("not halted").draw;
                assert_eq!((draw.vertex_count, draw.instance_count), (3, 1));
            }
        }
    }

    #[test]
    fn halt_is_sticky_and_reported_once() {
        let (mut fl, reporter) = frame_loop(Variant::Rotating);
        let _ = fl.fail(RenderError::DeviceLost {
            reason: "unknown".to_string(),
            message: "gone".to_string(),
        });

        for _ in 0..5 {
            assert!(fl.plan().is_none());
            fl.advance(3.0);
        }
        assert!(fl.is_halted());
        assert_eq!(reporter.messages().len(), 1);
    }
}
