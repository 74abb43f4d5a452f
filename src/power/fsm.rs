//! Power State Machine.
//!
//! A three-state Moore FSM governing the power and clock state of the
//! memory controller. Transitions consume the synchronized save/restore
//! requests and the wakeup timer's completion flag from the prior tick;
//! output decisions are a pure function of the current state.
//!
//! The state is a closed enum, so an invalid encoding is unrepresentable
//! inside the core. Where an integration boundary forces a raw 2-bit
//! encoding, [`PowerFsm::load_encoded`] decodes defensively: an invalid
//! pattern is treated as a fault, outputs block for that tick, and the
//! machine forces itself to Active on the next tick.

/// Power state of the controller.
///
/// Exactly one of three values at all times; the fourth pattern a 2-bit
/// encoding could hold is rejected at the decode boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Powered, clocked, transactions allowed. Post-reset state.
    #[default]
    Active,
    /// Power removed, isolation engaged, transactions blocked.
    Sleep,
    /// Power restored, waiting for the wakeup timer; transactions blocked.
    Wakeup,
}

impl PowerState {
    /// Encodes the state as the external 2-bit status field.
    pub fn to_bits(self) -> u8 {
        match self {
            PowerState::Active => 0b00,
            PowerState::Sleep => 0b01,
            PowerState::Wakeup => 0b10,
        }
    }

    /// Decodes a raw 2-bit status field.
    ///
    /// # Returns
    ///
    /// `None` for the unreachable `0b11` pattern (or any wider value).
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(PowerState::Active),
            0b01 => Some(PowerState::Sleep),
            0b10 => Some(PowerState::Wakeup),
            _ => None,
        }
    }
}

/// Gate applied to the bus handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyGate {
    /// Transactions may be accepted; `ready` follows the protocol.
    Allow,
    /// All transactions stall; `ready` is forced low.
    Block,
}

/// Moore output decisions of the power FSM.
///
/// These are control *decisions* only; the physical isolation cells, power
/// switches, and clock-gating cell that realize them are external
/// collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerControls {
    /// Engage isolation at the domain boundary.
    pub isolation_en: bool,
    /// Remove power from the backing store's domain.
    pub power_gate_en: bool,
    /// Gate applied to the bus handshake.
    pub ready_gate: ReadyGate,
    /// Run the wakeup timer.
    pub timer_enable: bool,
}

impl PowerControls {
    /// The most conservative decision set: everything isolated and blocked.
    ///
    /// Used while recovering from an invalid state encoding.
    fn blocking() -> Self {
        Self {
            isolation_en: true,
            power_gate_en: false,
            ready_gate: ReadyGate::Block,
            timer_enable: false,
        }
    }
}

/// Three-state power control FSM.
#[derive(Clone, Debug)]
pub struct PowerFsm {
    state: PowerState,
    /// Set when an invalid external encoding was loaded; cleared by the
    /// recovery transition.
    fault: bool,
}

impl PowerFsm {
    /// Creates the FSM in its post-reset state (Active).
    pub fn new() -> Self {
        Self {
            state: PowerState::Active,
            fault: false,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Returns the Moore output decisions for the current state.
    ///
    /// | State  | isolation | power_gate | ready_gate | timer_enable |
    /// |--------|-----------|------------|------------|--------------|
    /// | Active | off       | off        | Allow      | off          |
    /// | Sleep  | on        | on         | Block      | off          |
    /// | Wakeup | on        | off        | Block      | on           |
    ///
    /// While a fault is pending the outputs are the blocking set regardless
    /// of state.
    pub fn controls(&self) -> PowerControls {
        if self.fault {
            return PowerControls::blocking();
        }

        match self.state {
            PowerState::Active => PowerControls {
                isolation_en: false,
                power_gate_en: false,
                ready_gate: ReadyGate::Allow,
                timer_enable: false,
            },
            PowerState::Sleep => PowerControls {
                isolation_en: true,
                power_gate_en: true,
                ready_gate: ReadyGate::Block,
                timer_enable: false,
            },
            PowerState::Wakeup => PowerControls {
                isolation_en: true,
                power_gate_en: false,
                ready_gate: ReadyGate::Block,
                timer_enable: true,
            },
        }
    }

    /// Commits the transition for this tick.
    ///
    /// # Arguments
    ///
    /// * `save_request` - Synchronized power-save request.
    /// * `restore_request` - Synchronized power-restore request.
    /// * `timer_done` - Wakeup timer completion as of the *prior* tick.
    pub fn advance(&mut self, save_request: bool, restore_request: bool, timer_done: bool) {
        // Fault recovery overrides the normal transition table.
        if self.fault {
            self.fault = false;
            self.state = PowerState::Active;
            return;
        }

        self.state = match self.state {
            PowerState::Active if save_request => PowerState::Sleep,
            PowerState::Active => PowerState::Active,
            PowerState::Sleep if restore_request => PowerState::Wakeup,
            PowerState::Sleep => PowerState::Sleep,
            PowerState::Wakeup if timer_done => PowerState::Active,
            PowerState::Wakeup => PowerState::Wakeup,
        };
    }

    /// Loads a raw 2-bit state encoding from an integration boundary.
    ///
    /// A valid encoding replaces the current state. The unreachable pattern
    /// is a fault: it is reported, outputs block for the current tick, and
    /// the next [`PowerFsm::advance`] forces Active.
    pub fn load_encoded(&mut self, bits: u8) {
        match PowerState::from_bits(bits) {
            Some(state) => {
                self.state = state;
                self.fault = false;
            }
            None => {
                println!(
                    "[Power] Invalid state encoding {:#04b}; blocking outputs and forcing Active.",
                    bits
                );
                self.fault = true;
            }
        }
    }

    /// Forces the FSM back to its post-reset state.
    pub fn reset(&mut self) {
        self.state = PowerState::Active;
        self.fault = false;
    }
}

impl Default for PowerFsm {
    fn default() -> Self {
        Self::new()
    }
}
