//! Bus Interface.
//!
//! Per-tick protocol evaluation for the controller's requester-facing port.
//! Each tick the interface decides whether a transaction is accepted,
//! derives the byte-lane write mask, drives the backing store, advances the
//! read-data pipeline, and folds the power FSM's readiness gate and the
//! parity check result into the transaction-level outputs.

use crate::common::signals::{BusInputs, BusResponse, Direction, MemCommand, TransferSize};
use crate::mem::BackingStore;
use crate::parity::IntegrityStore;
use crate::power::ReadyGate;

use super::latches::ReadPipeline;

/// Derives the byte-lane enable pattern for a write.
///
/// * Byte: one of four single-byte masks selected by address bits 1:0.
/// * Half: lower half when address bit 1 is 0, upper half otherwise.
/// * Word (or wider): all byte lanes enabled.
pub fn write_mask(size: TransferSize, address: u32) -> u8 {
    match size {
        TransferSize::Byte => 1 << (address & 0b11),
        TransferSize::Half => {
            if address & 0b10 == 0 {
                0b0011
            } else {
                0b1100
            }
        }
        TransferSize::Word => 0b1111,
    }
}

/// Requester-visible results of one bus tick.
#[derive(Clone, Copy, Debug)]
pub struct BusTick {
    /// Committed read data.
    pub read_data: u32,
    /// Handshake ready; forced low while the FSM blocks.
    pub ready: bool,
    /// Response code (always `Ok`).
    pub response: BusResponse,
    /// One-tick parity mismatch pulse.
    pub parity_error: bool,
    /// Backing-store drive signals.
    pub mem: MemCommand,
}

/// Protocol handshake, write-mask derivation, and read pipeline.
#[derive(Clone, Debug, Default)]
pub struct BusInterface {
    pipeline: ReadPipeline,
    /// Address of the read accepted last tick, awaiting capture.
    pending_read: Option<u32>,
}

impl BusInterface {
    /// Creates an idle interface with an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one protocol tick.
    ///
    /// Ordering within the tick is fixed: the pipeline shifts, the read
    /// accepted last tick is captured and parity-checked, and only then is
    /// this tick's transaction processed. A read therefore always observes
    /// the pre-write value of a same-tick write.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Requester-driven signals sampled this tick.
    /// * `gate` - The power FSM's readiness decision for this tick.
    /// * `store` - The backing memory array.
    /// * `parity` - The parity bit table.
    pub fn evaluate<B: BackingStore>(
        &mut self,
        inputs: &BusInputs,
        gate: ReadyGate,
        store: &mut B,
        parity: &mut IntegrityStore,
    ) -> BusTick {
        self.pipeline.shift();

        // Capture and check the read accepted on the prior tick. The check
        // runs against the same word that will commit next tick.
        let parity_error = match self.pending_read.take() {
            Some(address) => {
                let word = store.read(address);
                self.pipeline.capture(word);
                IntegrityStore::check(word, parity.read(address))
            }
            None => false,
        };

        let allowed = gate == ReadyGate::Allow;
        let accepted = inputs.select && inputs.kind.is_active() && allowed;
        let direction = if inputs.write {
            Direction::Write
        } else {
            Direction::Read
        };
        let mask = write_mask(inputs.size, inputs.address);

        if accepted {
            match direction {
                Direction::Write => {
                    store.write(inputs.address, inputs.write_data, mask);
                    parity.write(inputs.address, IntegrityStore::generate(inputs.write_data));
                }
                Direction::Read => {
                    self.pending_read = Some(inputs.address);
                }
            }
        }

        BusTick {
            read_data: self.pipeline.committed(),
            ready: allowed,
            response: BusResponse::Ok,
            parity_error,
            mem: MemCommand {
                chip_select: accepted,
                write_enable: accepted && direction == Direction::Write,
                address: inputs.address,
                write_data: inputs.write_data,
                write_mask: mask,
            },
        }
    }

    /// Discards the pipeline and any in-flight read, as on reset.
    pub fn reset(&mut self) {
        self.pipeline.clear();
        self.pending_read = None;
    }
}
