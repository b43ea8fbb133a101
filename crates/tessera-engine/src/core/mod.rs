//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the demos built on it, plus the per-frame context handed to them.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, FrameStatus, WindowCtx};
