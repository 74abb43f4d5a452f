//! Scenario file format and loader.
//!
//! A scenario is a JSON array of stimulus operations, for example:
//!
//! ```json
//! [
//!     { "op": "write", "address": 5, "data": 3735928559, "size": "word" },
//!     { "op": "read", "address": 5 },
//!     { "op": "save", "hold": 6 },
//!     { "op": "restore", "hold": 12 },
//!     { "op": "corrupt_data", "address": 5, "bit": 3 },
//!     { "op": "read", "address": 5 }
//! ]
//! ```

use serde::Deserialize;
use std::fs;
use std::process;

use crate::common::signals::TransferSize;

fn default_hold() -> u64 {
    12
}

fn default_size() -> TransferSize {
    TransferSize::Word
}

/// One stimulus operation in a scenario script.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Stimulus {
    /// Issue a write transaction.
    Write {
        address: u32,
        data: u32,
        #[serde(default = "default_size")]
        size: TransferSize,
    },
    /// Issue a read transaction and report its committed data.
    Read {
        address: u32,
        #[serde(default = "default_size")]
        size: TransferSize,
    },
    /// Hold the bus idle for a number of ticks.
    Idle { ticks: u64 },
    /// Assert the foreign-domain power-save request for `hold` ticks.
    Save {
        #[serde(default = "default_hold")]
        hold: u64,
    },
    /// Assert the foreign-domain power-restore request for `hold` ticks.
    Restore {
        #[serde(default = "default_hold")]
        hold: u64,
    },
    /// Assert the reset level for a number of ticks.
    Reset { ticks: u64 },
    /// Flip one bit of the stored word at `address` (fault injection).
    CorruptData { address: u32, bit: u32 },
    /// Flip the stored parity bit at `address` (fault injection).
    CorruptParity { address: u32 },
}

/// A parsed stimulus script.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario(pub Vec<Stimulus>);

impl Scenario {
    /// Loads and parses a scenario file, exiting on failure.
    pub fn load(path: &str) -> Self {
        let text = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: Could not read scenario '{}': {}", path, e);
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: Could not parse scenario '{}': {}", path, e);
            process::exit(1);
        })
    }
}
