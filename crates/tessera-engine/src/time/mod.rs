//! Time subsystem.
//!
//! - one `FrameClock` per render loop; call `tick()` once per presented frame
//! - `WallClock` supplies the absolute time that drives animations

mod frame_clock;
mod wall_clock;

pub use frame_clock::{FrameClock, FrameTime};
pub use wall_clock::WallClock;
