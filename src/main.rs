//! Power-Aware Memory Controller Simulator CLI.
//!
//! The main executable for the simulator. It handles command-line argument
//! parsing, controller construction, and the scenario-driven run loop.
//!
//! # Usage
//!
//! ```text
//! power-memctl --config configs/default.toml --scenario scenarios/demo.json
//! ```

use clap::Parser;
use std::{fs, process};

extern crate power_memctl;

use power_memctl::config::Config;
use power_memctl::sim::{Harness, Scenario};

/// Command-line arguments for the memory controller simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Power-Aware Memory Controller Simulator")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    #[arg(short, long)]
    scenario: String,

    #[arg(long)]
    trace: bool,
}

/// Main entry point for the simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the TOML
///    configuration file.
/// 2. **Initialization**: Constructs the controller and run harness.
/// 3. **Scenario**: Loads the JSON stimulus script.
/// 4. **Run loop**: Drives the controller tick by tick through the script.
/// 5. **Teardown**: Prints the run statistics.
fn main() {
    let args = Args::parse();
    let config_content = fs::read_to_string(&args.config).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read config '{}': {}", args.config, e);
        process::exit(1);
    });
    let mut config: Config = toml::from_str(&config_content).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not parse config '{}': {}", args.config, e);
        process::exit(1);
    });
    if args.trace {
        config.general.trace_ticks = true;
    }

    println!("Global Configuration");
    println!("--------------------");
    println!("General:");
    println!("  Trace Ticks:        {}", config.general.trace_ticks);
    println!("Synchronizer:");
    println!("  Stages:             {}", config.sync.stages);
    println!("Wakeup Timer:");
    println!("  Count Target:       {}", config.timer.wakeup_count);
    println!("Memory:");
    println!("  Words:              {}", config.memory.words);
    println!();

    let scenario = Scenario::load(&args.scenario);
    let mut harness = Harness::new(&config);
    harness.run(&scenario);
    harness.into_stats().print();
}
