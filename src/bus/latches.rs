//! Read-data pipeline latches.
//!
//! Two chained single-value registers carry in-flight read data: the
//! backing store's result lands in `captured` one tick after the read is
//! accepted (modeling the store's own output delay) and moves to
//! `committed` one tick later. `committed` is the only value the requester
//! ever sees, so read data is visible exactly two ticks after acceptance.

/// Two-stage register pair for in-flight read data.
///
/// Invariant: `committed` at tick *t* holds the value written into
/// `captured` at tick *t − 1*. Both registers shift unconditionally every
/// tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadPipeline {
    /// Mid-latency stage; the backing store's result as sampled the tick
    /// after acceptance.
    captured: u32,
    /// Output stage; the transaction's visible read result.
    committed: u32,
}

impl ReadPipeline {
    /// Shifts the pipeline: the captured value becomes the committed value.
    ///
    /// Must run before [`ReadPipeline::capture`] within a tick so the
    /// committed register always holds the prior tick's capture.
    pub fn shift(&mut self) {
        self.committed = self.captured;
    }

    /// Loads the backing store's read result into the capture stage.
    pub fn capture(&mut self, word: u32) {
        self.captured = word;
    }

    /// Returns the committed read data.
    pub fn committed(&self) -> u32 {
        self.committed
    }

    /// Discards both stages, as on reset.
    pub fn clear(&mut self) {
        self.captured = 0;
        self.committed = 0;
    }
}
