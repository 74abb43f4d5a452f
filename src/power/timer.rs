//! Wakeup Timer.
//!
//! Counts consecutive enabled ticks up to a target and asserts completion
//! with latch-once ("safety lock") semantics: `done` can only become true
//! after the count has reached the target and held there under continuous
//! enable, and a single disabled tick throws away all progress. A spurious
//! one-tick enable glitch therefore can never produce a completion pulse.

/// Result of one timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerStatus {
    /// Completion flag; latched while enable stays high.
    pub done: bool,
    /// Current count, saturating at the target.
    pub count: u8,
}

/// Saturating tick counter with latch-once completion.
///
/// With the default target of 3, `done` first asserts on the 4th
/// consecutive enabled tick (count goes 0→1→2→3, then the lock engages on
/// the tick the count holds at 3) and stays asserted while enable remains
/// high.
#[derive(Clone, Debug)]
pub struct WakeupTimer {
    target: u8,
    count: u8,
    locked: bool,
}

impl WakeupTimer {
    /// Creates a timer that completes after `target + 1` consecutive
    /// enabled ticks.
    pub fn new(target: u8) -> Self {
        Self {
            target,
            count: 0,
            locked: false,
        }
    }

    /// Advances the timer by one tick.
    ///
    /// While `enable` is high the count steps toward the target and the
    /// completion lock engages one tick after the target is reached. Any
    /// tick with `enable` low resets count and lock.
    ///
    /// # Returns
    ///
    /// The completion flag and the count as of the end of this tick.
    pub fn tick(&mut self, enable: bool) -> TimerStatus {
        if !enable {
            self.count = 0;
            self.locked = false;
        } else if self.count < self.target {
            self.count += 1;
        } else {
            // Count holds at the target; only now may the lock engage.
            self.locked = true;
        }

        TimerStatus {
            done: self.locked,
            count: self.count,
        }
    }

    /// Forces the timer back to its post-reset state.
    pub fn reset(&mut self) {
        self.count = 0;
        self.locked = false;
    }
}
