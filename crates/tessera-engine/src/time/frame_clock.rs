use super::WallClock;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Wall-clock seconds since the Unix epoch, sampled at the tick.
    pub wall_seconds: f64,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame_index: u64,
    wall: WallClock,
}

impl FrameClock {
    /// Creates a clock backed by the system wall clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the wall-clock source.
    pub fn with_wall_clock(mut self, wall: WallClock) -> Self {
        self.wall = wall;
        self
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let ft = FrameTime {
            wall_seconds: self.wall.now_seconds(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn wall_time_comes_from_the_configured_source() {
        let mut clock = FrameClock::new().with_wall_clock(WallClock::fixed(42.0));
        let first = clock.tick();
        let second = clock.tick();
        assert_eq!((first.wall_seconds, second.wall_seconds), (42.0, 42.0));
        assert_eq!(second.frame_index, 1);
    }
}
