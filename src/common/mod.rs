//! Common signal types used throughout the memory controller simulator.
//!
//! This module provides the per-tick signal bundles exchanged at the three
//! external boundaries of the core: the requester-facing bus, the
//! foreign-clock-domain power request lines, and the backing-store drive
//! signals.

/// Bus, power-domain, and backing-store signal definitions.
pub mod signals;

pub use signals::{
    BusInputs, BusResponse, ControllerOutputs, Direction, MemCommand, PowerRequests,
    TransferKind, TransferSize,
};
