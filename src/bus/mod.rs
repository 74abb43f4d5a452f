//! Bus protocol interface.
//!
//! This module contains the per-tick protocol evaluation (accept decision,
//! write-mask derivation, backing-store drive, readiness override) and the
//! two-stage read-data pipeline latches.

/// Bus interface protocol evaluation.
pub mod interface;

/// Read-data pipeline latches.
pub mod latches;

pub use interface::{write_mask, BusInterface, BusTick};
pub use latches::ReadPipeline;
