//! The triangle renderer.
//!
//! Split in two halves:
//! - [`FrameLoop`] and [`TriangleAnimation`] decide what each frame does and
//!   hold no GPU state, so they are testable headless
//! - [`FrameRenderer`] owns the device resources and carries out a
//!   [`FramePlan`] against the current frame target

mod config;
mod frame_loop;
mod probe;
mod renderer;
mod uniform;
mod vertex;

pub use config::{TriangleConfig, Variant};
pub use frame_loop::{FrameLoop, FrameOutcome, FramePlan, TriangleAnimation};
pub use probe::CubeArrayProbe;
pub use renderer::FrameRenderer;
pub use uniform::{UniformBlock, UNIFORM_ALPHA};
pub use vertex::{ColorVertex2, ColorVertex4, VertexLayout, TRIANGLE_POS2, TRIANGLE_POS4};
