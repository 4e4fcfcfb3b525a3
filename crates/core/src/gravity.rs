//! Gravity scheduler - turns elapsed frame time into automatic drops.

use crate::scoring::get_drop_interval_ms;

/// Accumulates elapsed time and reports when the active piece is due to fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gravity {
    interval_ms: u32,
    accumulator_ms: u32,
    /// Discard the next tick's elapsed time (set on resume).
    rebase_pending: bool,
}

impl Gravity {
    pub fn new(level: u32) -> Self {
        Self {
            interval_ms: get_drop_interval_ms(level),
            accumulator_ms: 0,
            rebase_pending: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn accumulator_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Recompute the interval for a new level. The accumulator is kept.
    pub fn set_level(&mut self, level: u32) {
        self.interval_ms = get_drop_interval_ms(level);
    }

    /// Add one tick of elapsed time. Returns true once the accumulator exceeds
    /// the interval; the caller drops the piece and calls [`Gravity::reset`].
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.rebase_pending {
            self.rebase_pending = false;
            return false;
        }
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        self.accumulator_ms > self.interval_ms
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }

    /// Start a fresh timing base: empty accumulator, and the next tick's
    /// elapsed time (which may span a pause) is ignored.
    ///
    /// Hosts that keep ticking while paused lose one ordinary frame here
    /// instead, so the first drop after resuming comes one frame late.
    pub fn rebase(&mut self) {
        self.accumulator_ms = 0;
        self.rebase_pending = true;
    }
}
