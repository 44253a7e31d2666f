//! Wall-clock source backed by the operating system.
use std::time::{SystemTime, UNIX_EPOCH};

use vesper_clock::WallClock;

/// [`WallClock`] reading the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWallClock;

impl SystemWallClock {
    /// Creates a system wall clock.
    pub fn new() -> Self {
        Self
    }
}

impl WallClock for SystemWallClock {
    fn now_millis(&self) -> i64 {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        duration.as_millis() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_after_2020() {
        let clock = SystemWallClock::new();
        assert!(clock.now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn test_now_does_not_go_backwards() {
        let clock = SystemWallClock::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
    }
}
