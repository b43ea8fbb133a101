//! Tessera engine crate.
//!
//! Owns the platform + GPU runtime pieces the triangle demos run on: device
//! negotiation, the window loop, the triangle renderer and the fatal-error
//! reporting path.

pub mod core;
pub mod device;
pub mod error;
pub mod logging;
pub mod paint;
pub mod render;
pub mod report;
pub mod time;
pub mod window;

pub use error::RenderError;
