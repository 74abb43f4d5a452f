//! Controller composition root.
//!
//! Wires the request synchronizers, power FSM, wakeup timer, bus interface,
//! parity store, and backing store together. The controller owns no logic
//! beyond wiring: one call to [`Controller::tick`] advances every component
//! atomically, with each component's outputs computed from end-of-prior-tick
//! state plus the inputs sampled this tick. No component can ever observe
//! another's half-updated state.

use crate::bus::BusInterface;
use crate::cdc::Synchronizer;
use crate::common::signals::{BusInputs, BusResponse, ControllerOutputs, MemCommand, PowerRequests};
use crate::config::Config;
use crate::mem::{BackingStore, SramModel};
use crate::parity::IntegrityStore;
use crate::power::{PowerControls, PowerFsm, PowerState, WakeupTimer};

/// The complete memory controller core.
///
/// Generic over the backing store so the external memory array can be
/// replaced at the trait seam; [`Controller::new`] builds the default
/// SRAM-backed configuration.
pub struct Controller<B: BackingStore = SramModel> {
    save_sync: Synchronizer,
    restore_sync: Synchronizer,
    fsm: PowerFsm,
    timer: WakeupTimer,
    /// Timer completion as of the end of the prior tick; the FSM and the
    /// timer form a feedback loop evaluated with a one-tick delay so no
    /// same-tick combinational cycle exists.
    timer_done: bool,
    bus: BusInterface,
    parity: IntegrityStore,
    store: B,
}

impl Controller<SramModel> {
    /// Builds an SRAM-backed controller from the configuration.
    pub fn new(config: &Config) -> Self {
        let store = SramModel::new(config.memory.words);
        Self::with_store(config, store)
    }
}

impl<B: BackingStore> Controller<B> {
    /// Builds a controller around a caller-provided backing store.
    pub fn with_store(config: &Config, store: B) -> Self {
        Self {
            save_sync: Synchronizer::new(config.sync.stages),
            restore_sync: Synchronizer::new(config.sync.stages),
            fsm: PowerFsm::new(),
            timer: WakeupTimer::new(config.timer.wakeup_count),
            timer_done: false,
            bus: BusInterface::new(),
            parity: IntegrityStore::new(config.memory.words),
            store,
        }
    }

    /// Advances the whole core by one global tick.
    ///
    /// Evaluation order per tick: synchronize the foreign-domain requests,
    /// derive the FSM's Moore outputs from the current state, evaluate the
    /// bus protocol under the readiness gate, tick the wakeup timer, and
    /// finally commit the FSM transition using the prior tick's timer
    /// completion.
    ///
    /// While `reset` is asserted every component holds its initial state
    /// and any in-flight read is discarded.
    pub fn tick(
        &mut self,
        bus: &BusInputs,
        power: &PowerRequests,
        reset: bool,
    ) -> ControllerOutputs {
        if reset {
            self.reset();
            return ControllerOutputs {
                read_data: 0,
                ready: true,
                response: BusResponse::Ok,
                parity_error: false,
                power_state: PowerState::Active,
                mem: MemCommand::default(),
            };
        }

        let save = self.save_sync.observe(power.save);
        let restore = self.restore_sync.observe(power.restore);

        let controls = self.fsm.controls();
        let bus_tick = self
            .bus
            .evaluate(bus, controls.ready_gate, &mut self.store, &mut self.parity);

        // Status reflects the state the outputs were derived from; the
        // transition commits at end of tick.
        let state = self.fsm.state();

        let done_prev = self.timer_done;
        self.timer_done = self.timer.tick(controls.timer_enable).done;
        self.fsm.advance(save, restore, done_prev);

        ControllerOutputs {
            read_data: bus_tick.read_data,
            ready: bus_tick.ready,
            response: bus_tick.response,
            parity_error: bus_tick.parity_error,
            power_state: state,
            mem: bus_tick.mem,
        }
    }

    /// Forces every component to its defined initial state.
    pub fn reset(&mut self) {
        self.save_sync.reset();
        self.restore_sync.reset();
        self.fsm.reset();
        self.timer.reset();
        self.timer_done = false;
        self.bus.reset();
        self.parity.reset();
        self.store.reset();
    }

    /// Current power state (observability only).
    pub fn power_state(&self) -> PowerState {
        self.fsm.state()
    }

    /// The isolation, power-gate, readiness, and timer decisions for the
    /// current state. Their physical realization is external.
    pub fn power_controls(&self) -> PowerControls {
        self.fsm.controls()
    }

    /// External 2-bit encoding of the current power state.
    pub fn power_state_bits(&self) -> u8 {
        self.fsm.state().to_bits()
    }

    /// Loads a raw power-state encoding from an integration boundary.
    ///
    /// Invalid encodings engage the FSM's blocking fault recovery.
    pub fn load_power_state(&mut self, bits: u8) {
        self.fsm.load_encoded(bits);
    }

    /// Mutable access to the backing store, for fault injection in tests.
    pub fn store_mut(&mut self) -> &mut B {
        &mut self.store
    }

    /// Mutable access to the parity table, for fault injection in tests.
    pub fn parity_mut(&mut self) -> &mut IntegrityStore {
        &mut self.parity
    }

    /// True when every parity table entry is cleared.
    pub fn parity_table_clear(&self) -> bool {
        self.parity.is_clear()
    }
}
