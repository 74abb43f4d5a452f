//! Power management control.
//!
//! This module contains the three-state power FSM, its Moore output
//! decisions, and the safety-locked wakeup timer that paces the
//! Wakeup-to-Active transition.

/// Power state machine and output decisions.
pub mod fsm;

/// Wakeup timer with latch-once completion.
pub mod timer;

pub use fsm::{PowerControls, PowerFsm, PowerState, ReadyGate};
pub use timer::{TimerStatus, WakeupTimer};
