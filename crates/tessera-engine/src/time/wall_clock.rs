use std::time::{SystemTime, UNIX_EPOCH};

/// Source of absolute wall-clock time in seconds since the Unix epoch.
///
/// Kept as `f64`: epoch seconds lose sub-second precision in `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallClock {
    #[default]
    System,
    /// Always reports the same instant. Used by tests and captures.
    Fixed(f64),
}

impl WallClock {
    pub fn fixed(seconds: f64) -> Self {
        WallClock::Fixed(seconds)
    }

    pub fn now_seconds(&self) -> f64 {
        match self {
            WallClock::System => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs_f64())
                .unwrap_or(0.0),
            WallClock::Fixed(seconds) => *seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_stable() {
        let clock = WallClock::fixed(12.5);
        assert_eq!(clock.now_seconds(), 12.5);
        assert_eq!(clock.now_seconds(), 12.5);
    }

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(WallClock::System.now_seconds() > 1_577_836_800.0);
    }
}
