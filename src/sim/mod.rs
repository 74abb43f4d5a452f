//! Simulation harness and scenario loading.
//!
//! A scenario is a JSON stimulus script describing bus transactions, power
//! requests, idle gaps, and fault injections. The harness expands the
//! script into per-tick inputs, drives the controller, and collects run
//! statistics.

/// Scenario file format and loader.
pub mod scenario;

/// Tick-by-tick run harness.
pub mod harness;

pub use harness::Harness;
pub use scenario::{Scenario, Stimulus};
