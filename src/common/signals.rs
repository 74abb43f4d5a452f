//! Per-tick signal bundles for the controller's external boundaries.
//!
//! All signals here are sampled or driven once per global tick. Input
//! bundles are ephemeral (constructed per tick, never persisted); output
//! bundles are pure functions of prior-tick state plus current inputs.

use crate::power::PowerState;

/// Transfer type driven by the requester alongside `select`.
///
/// Only the idle/non-idle distinction affects the accept decision; the
/// non-idle kinds are carried through for observability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransferKind {
    /// No transfer this tick.
    #[default]
    Idle,
    /// First transfer of a burst, or a single transfer.
    NonSeq,
    /// Continuation transfer of a burst.
    Seq,
    /// Requester-inserted wait state within a burst.
    Busy,
}

impl TransferKind {
    /// Returns true for any transfer kind that can be accepted.
    pub fn is_active(self) -> bool {
        !matches!(self, TransferKind::Idle)
    }
}

/// Declared width of a transfer, used for write-mask derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferSize {
    /// 8-bit transfer; one byte lane selected by the low address bits.
    Byte,
    /// 16-bit transfer; lower or upper half selected by address bit 1.
    Half,
    /// 32-bit (or wider) transfer; all byte lanes enabled.
    #[default]
    Word,
}

/// Direction of an accepted transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Data flows from the backing store to the requester.
    Read,
    /// Data flows from the requester to the backing store.
    Write,
}

/// Response code returned to the requester.
///
/// Protocol-error responses are not modeled; every completed transaction
/// reports `Ok`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BusResponse {
    /// Successful transfer.
    #[default]
    Ok,
}

/// Requester-driven bus inputs, sampled once per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct BusInputs {
    /// Slave select for this controller.
    pub select: bool,
    /// Transaction address.
    pub address: u32,
    /// Write when true, read otherwise.
    pub write: bool,
    /// Transfer type.
    pub kind: TransferKind,
    /// Declared transfer width.
    pub size: TransferSize,
    /// Data to store on a write.
    pub write_data: u32,
}

impl BusInputs {
    /// Builds the inputs for a write transaction.
    pub fn write(address: u32, data: u32, size: TransferSize) -> Self {
        Self {
            select: true,
            address,
            write: true,
            kind: TransferKind::NonSeq,
            size,
            write_data: data,
        }
    }

    /// Builds the inputs for a read transaction.
    pub fn read(address: u32, size: TransferSize) -> Self {
        Self {
            select: true,
            address,
            write: false,
            kind: TransferKind::NonSeq,
            size,
            write_data: 0,
        }
    }
}

/// Power request lines from the foreign clock domain, sampled once per tick.
///
/// These are opaque asynchronous levels; nothing may be assumed about their
/// timing relative to the local clock. They are only consumed through the
/// synchronizers.
#[derive(Clone, Copy, Debug, Default)]
pub struct PowerRequests {
    /// Request to remove power and enter Sleep.
    pub save: bool,
    /// Request to restore power and begin Wakeup.
    pub restore: bool,
}

/// Drive signals presented to the backing store each tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemCommand {
    /// Store selected this tick (a transaction was accepted).
    pub chip_select: bool,
    /// Store write strobe; low means a read access.
    pub write_enable: bool,
    /// Word address forwarded from the bus.
    pub address: u32,
    /// Write data forwarded from the bus.
    pub write_data: u32,
    /// Byte-lane enable pattern, one bit per byte of the 32-bit word.
    pub write_mask: u8,
}

/// Controller outputs for one tick.
#[derive(Clone, Copy, Debug)]
pub struct ControllerOutputs {
    /// Committed read data; valid two ticks after a read is accepted.
    pub read_data: u32,
    /// Transfer-ready handshake; forced low while the power FSM blocks.
    pub ready: bool,
    /// Response code (always `Ok` in this core).
    pub response: BusResponse,
    /// One-tick parity mismatch pulse.
    pub parity_error: bool,
    /// Current power state, for observability only.
    pub power_state: PowerState,
    /// Backing-store drive signals for this tick.
    pub mem: MemCommand,
}
