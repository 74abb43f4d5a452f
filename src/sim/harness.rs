//! Tick-by-tick run harness.
//!
//! Expands a scenario script into per-tick inputs, drives the controller,
//! reports read results and parity errors as they commit, and collects run
//! statistics.

use crate::common::signals::{BusInputs, PowerRequests, TransferSize};
use crate::config::Config;
use crate::controller::Controller;
use crate::sim::scenario::{Scenario, Stimulus};
use crate::stats::SimStats;

/// Drives a [`Controller`] through a scenario script.
pub struct Harness {
    controller: Controller,
    stats: SimStats,
    trace: bool,
    tick: u64,
}

impl Harness {
    /// Builds a harness around a freshly-reset controller.
    pub fn new(config: &Config) -> Self {
        let trace = cfg!(feature = "always-trace") || config.general.trace_ticks;
        Self {
            controller: Controller::new(config),
            stats: SimStats::default(),
            trace,
            tick: 0,
        }
    }

    /// Runs the whole scenario, then drains the read pipeline.
    pub fn run(&mut self, scenario: &Scenario) {
        for stimulus in &scenario.0 {
            self.apply(stimulus);
        }
        // Let any final in-flight read commit.
        self.idle_ticks(2);
    }

    /// Consumes the harness and returns the collected statistics.
    pub fn into_stats(self) -> SimStats {
        self.stats
    }

    fn apply(&mut self, stimulus: &Stimulus) {
        match *stimulus {
            Stimulus::Write {
                address,
                data,
                size,
            } => self.do_write(address, data, size),
            Stimulus::Read { address, size } => self.do_read(address, size),
            Stimulus::Idle { ticks } => self.idle_ticks(ticks),
            Stimulus::Save { hold } => self.hold_request(true, false, hold),
            Stimulus::Restore { hold } => self.hold_request(false, true, hold),
            Stimulus::Reset { ticks } => self.hold_reset(ticks),
            Stimulus::CorruptData { address, bit } => {
                println!("[Sim] Flipping data bit {} @ {:#04x}", bit, address);
                self.controller.store_mut().flip_bit(address, bit);
            }
            Stimulus::CorruptParity { address } => {
                println!("[Sim] Flipping parity bit @ {:#04x}", address);
                self.controller.parity_mut().flip(address);
            }
        }
    }

    fn do_write(&mut self, address: u32, data: u32, size: TransferSize) {
        let out = self.step(&BusInputs::write(address, data, size), &PowerRequests::default());
        if out.ready {
            self.stats.writes_accepted += 1;
            if self.trace {
                println!("[Sim] write @ {:#04x} <= {:#010x}", address, data);
            }
        } else {
            self.stats.requests_stalled += 1;
            println!("[Sim] write @ {:#04x} stalled (not ready)", address);
        }
    }

    fn do_read(&mut self, address: u32, size: TransferSize) {
        let out = self.step(&BusInputs::read(address, size), &PowerRequests::default());
        if !out.ready {
            self.stats.requests_stalled += 1;
            println!("[Sim] read @ {:#04x} stalled (not ready)", address);
            return;
        }
        self.stats.reads_accepted += 1;

        // Data commits two ticks after acceptance; the parity pulse, if
        // any, appears on the first of the two.
        let mid = self.step(&BusInputs::default(), &PowerRequests::default());
        let commit = self.step(&BusInputs::default(), &PowerRequests::default());
        println!(
            "[Sim] read @ {:#04x} => {:#010x}{}",
            address,
            commit.read_data,
            if mid.parity_error {
                "  ** PARITY ERROR **"
            } else {
                ""
            }
        );
    }

    fn idle_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.step(&BusInputs::default(), &PowerRequests::default());
        }
    }

    fn hold_request(&mut self, save: bool, restore: bool, hold: u64) {
        let power = PowerRequests { save, restore };
        for _ in 0..hold {
            self.step(&BusInputs::default(), &power);
        }
    }

    fn hold_reset(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick += 1;
            self.controller
                .tick(&BusInputs::default(), &PowerRequests::default(), true);
        }
    }

    fn step(
        &mut self,
        bus: &BusInputs,
        power: &PowerRequests,
    ) -> crate::common::signals::ControllerOutputs {
        self.tick += 1;
        let out = self.controller.tick(bus, power, false);
        self.stats.record_tick(out.power_state, out.parity_error);
        if self.trace {
            println!(
                "[Tick {:>6}] state={:?} ready={} cs={} we={} perr={}",
                self.tick,
                out.power_state,
                out.ready as u8,
                out.mem.chip_select as u8,
                out.mem.write_enable as u8,
                out.parity_error as u8
            );
        }
        out
    }
}
