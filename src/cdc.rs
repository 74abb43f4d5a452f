//! Clock-Domain-Crossing Synchronizer.
//!
//! A signal arriving from a foreign clock domain may change at any moment
//! relative to the local clock. This module delays such a signal by a fixed
//! number of local ticks before it is trusted, so that by construction any
//! single transition has fully settled before the rest of the core can
//! observe it. The synchronizer is purely a delay line; it has no error
//! conditions.
//!
//! The power-save and power-restore request lines each get their own
//! instance. The two events are logically independent and may assert
//! simultaneously or in either order, so the instances must not share state.

/// Fixed-depth boolean delay line for one foreign-domain signal.
///
/// The value returned by [`Synchronizer::observe`] at tick *t* is the raw
/// input as it was sampled at tick *t − depth*. Until `depth` ticks have
/// elapsed after reset, the output is false.
#[derive(Clone, Debug)]
pub struct Synchronizer {
    /// Shift history, oldest sample last.
    stages: Vec<bool>,
}

impl Synchronizer {
    /// Creates a synchronizer with the given depth in local ticks.
    ///
    /// # Arguments
    ///
    /// * `depth` - Number of ticks a sample takes to reach the output.
    pub fn new(depth: usize) -> Self {
        Self {
            stages: vec![false; depth],
        }
    }

    /// Samples the raw input and returns the delayed, domain-local value.
    ///
    /// Must be called exactly once per local tick. The returned value is the
    /// input from `depth` ticks ago.
    pub fn observe(&mut self, raw: bool) -> bool {
        // Depth 0 degenerates to a passthrough.
        if self.stages.is_empty() {
            return raw;
        }
        let out = self.stages.pop().unwrap_or(false);
        self.stages.insert(0, raw);
        out
    }

    /// Clears the entire shift history to false.
    pub fn reset(&mut self) {
        self.stages.fill(false);
    }
}
