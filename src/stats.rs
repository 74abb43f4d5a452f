//! Run statistics collection and reporting.
//!
//! Tracks tick counts, accepted transactions, readiness stalls, parity
//! errors, and per-power-state residency during a simulation run.

use std::time::Instant;

use crate::power::PowerState;

/// Run statistics structure tracking all simulation counters.
pub struct SimStats {
    start_time: Instant,
    pub ticks: u64,

    pub writes_accepted: u64,
    pub reads_accepted: u64,
    pub requests_stalled: u64,

    pub parity_errors: u64,

    pub ticks_active: u64,
    pub ticks_sleep: u64,
    pub ticks_wakeup: u64,
    pub state_transitions: u64,

    last_state: Option<PowerState>,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            writes_accepted: 0,
            reads_accepted: 0,
            requests_stalled: 0,
            parity_errors: 0,
            ticks_active: 0,
            ticks_sleep: 0,
            ticks_wakeup: 0,
            state_transitions: 0,
            last_state: None,
        }
    }
}

impl SimStats {
    /// Records the per-tick observable outcomes.
    pub fn record_tick(&mut self, state: PowerState, parity_error: bool) {
        self.ticks += 1;
        match state {
            PowerState::Active => self.ticks_active += 1,
            PowerState::Sleep => self.ticks_sleep += 1,
            PowerState::Wakeup => self.ticks_wakeup += 1,
        }
        if parity_error {
            self.parity_errors += 1;
        }
        if let Some(last) = self.last_state {
            if last != state {
                self.state_transitions += 1;
            }
        }
        self.last_state = Some(state);
    }

    /// Prints a formatted summary of the run.
    ///
    /// Displays tick counts, transaction counts, stall and parity error
    /// totals, power state residency, and host-side execution time.
    pub fn print(&self) {
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs_f64();
        let ticks = if self.ticks == 0 { 1 } else { self.ticks };

        println!("\n==========================================================");
        println!("POWER-AWARE MEMORY CONTROLLER RUN STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_ticks                {}", self.ticks);
        println!("----------------------------------------------------------");
        println!("TRANSACTIONS");
        println!("  bus.writes             {}", self.writes_accepted);
        println!("  bus.reads              {}", self.reads_accepted);
        println!("  bus.stalled            {}", self.requests_stalled);
        println!("  bus.parity_errors      {}", self.parity_errors);
        println!("----------------------------------------------------------");
        println!("POWER RESIDENCY");
        println!(
            "  state.active           {} ({:.2}%)",
            self.ticks_active,
            (self.ticks_active as f64 / ticks as f64) * 100.0
        );
        println!(
            "  state.sleep            {} ({:.2}%)",
            self.ticks_sleep,
            (self.ticks_sleep as f64 / ticks as f64) * 100.0
        );
        println!(
            "  state.wakeup           {} ({:.2}%)",
            self.ticks_wakeup,
            (self.ticks_wakeup as f64 / ticks as f64) * 100.0
        );
        println!("  state.transitions      {}", self.state_transitions);
        println!("==========================================================");
    }
}
