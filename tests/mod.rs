//! Test module organization.
//!
//! This module organizes all integration tests for the memory controller
//! simulator.

/// Clock-domain synchronizer delay tests.
mod cdc_tests;





/// End-to-end controller tests.
mod integration_tests;
