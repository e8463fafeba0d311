#![forbid(unsafe_code)]

//! Time sources.
//!
//! Widgets never read the wall clock directly. Every timestamp comes from
//! the host (a `requestAnimationFrame` time, a test step) and is folded into
//! a [`DeterministicClock`], which never moves backwards.

use web_time::Duration;

/// A monotonic time source measured from an arbitrary origin.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now_mono(&self) -> Duration;
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time. Earlier values are ignored.
    pub fn set(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }
}

impl Clock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.now
    }
}
