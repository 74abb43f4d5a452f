//! Power-Aware Memory Controller Simulator Library.
//!
//! This crate implements a cycle-stepped simulator for the control logic of a
//! power-aware memory controller. It arbitrates bus transactions, gates power
//! and clock state transitions, and guarantees single-bit error detection on
//! stored data.
//!
//! # Architecture
//!
//! * **Synchronizer**: fixed-depth delay lines for the foreign-clock-domain
//!   power request signals.
//! * **Power**: 3-state power FSM (Active, Sleep, Wakeup) with a safety-locked
//!   wakeup timer.
//! * **Bus**: protocol handshake, address decode, write-mask derivation, and a
//!   two-stage read-data pipeline.
//! * **Parity**: odd-parity generation and checking over a per-address bit
//!   table.
//!
//! # Modules
//!
//! * `common`: Shared signal types and per-tick I/O bundles.
//! * `config`: Configuration loading and parsing.
//! * `cdc`: Clock-domain-crossing synchronizer.
//! * `power`: Power state machine and wakeup timer.
//! * `bus`: Bus protocol interface and read pipeline.
//! * `parity`: Parity integrity store.
//! * `mem`: Backing store interface and SRAM model.
//! * `controller`: Composition root and global tick function.
//! * `sim`: Scenario loading and the run harness.
//! * `stats`: Run statistics collection.

/// Shared signal types and per-tick input/output bundles.
///
/// Provides the bus-facing, power-domain-facing, and backing-store-facing
/// signal structures exchanged between the controller and its environment.
pub mod common;

/// Configuration system for synchronizer, timer, and memory parameters.
///
/// Loads and parses TOML configuration files to customize the simulated
/// hardware parameters and tracing behavior.
pub mod config;

/// Clock-domain-crossing synchronizer.
///
/// Implements the fixed-depth delay line that makes a foreign-clock-domain
/// signal safe to consume in the local domain.
pub mod cdc;

/// Power state machine and wakeup timer.
///
/// Implements the Active/Sleep/Wakeup control FSM, its Moore output
/// decisions, and the safety-locked wakeup counter it depends on.
pub mod power;

/// Bus protocol interface.
///
/// Implements the transaction accept decision, write-mask derivation,
/// backing-store drive signals, and the two-stage read-data pipeline.
pub mod bus;

/// Parity integrity store.
///
/// Implements odd-parity generation and checking together with the
/// per-address stored-bit table.
pub mod parity;

/// Backing store interface and SRAM model.
///
/// Defines the seam to the external memory array and provides a simple
/// word-addressed SRAM implementation with fault injection for tests.
pub mod mem;

/// Composition root.
///
/// Wires synchronizers, power FSM, wakeup timer, bus interface, parity
/// store, and backing store together, advancing all of them atomically once
/// per global tick.
pub mod controller;

/// Simulation harness and scenario loaders.
///
/// Handles loading JSON stimulus scripts and driving the controller tick by
/// tick while collecting statistics.
pub mod sim;

/// Run statistics collection and reporting.
///
/// Tracks tick counts, accepted transactions, stalls, parity errors, and
/// per-power-state residency during a run.
pub mod stats;
