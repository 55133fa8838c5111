//! Frame clock: converts monotonic timestamps into step deltas.

use std::time::Instant;

use crate::types::MAX_STEP_SECS;

/// Tracks the previous frame instant.
///
/// The first tick after creation or `reset` yields a zero delta, so a fresh
/// run never starts with a bogus jump.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Forget the previous frame (e.g. when a new run starts).
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Seconds since the previous tick, capped at `MAX_STEP_SECS`.
    ///
    /// A stalled terminal (suspend, slow redraw) resumes with one bounded
    /// step instead of moving obstacles through the bike.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let dt = match self.last {
            Some(prev) => now
                .saturating_duration_since(prev)
                .as_secs_f64()
                .min(MAX_STEP_SECS),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}
