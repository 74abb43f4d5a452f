//! Backing Store Interface.
//!
//! The memory array behind the controller is an external collaborator; only
//! its interface is specified here. Reads are combinational (the bus
//! pipeline's capture stage realizes the declared read latency), writes are
//! byte-masked and commit within the tick they are driven.

/// Seam to the external memory array.
///
/// Implementations must make a write visible to every subsequent `read` of
/// the same address.
pub trait BackingStore {
    /// Returns the 32-bit word at `address`.
    fn read(&self, address: u32) -> u32;

    /// Writes `data` to `address` under the byte-lane `mask` (bit *n*
    /// enables byte *n*).
    fn write(&mut self, address: u32, data: u32, mask: u8);

    /// Clears the array to zero.
    fn reset(&mut self);
}

/// Word-addressed SRAM model.
///
/// A flat array of 32-bit words; addresses index words modulo the array
/// size. Includes a single-bit fault injection hook so parity detection can
/// be exercised.
#[derive(Clone, Debug)]
pub struct SramModel {
    words: Vec<u32>,
}

impl SramModel {
    /// Creates a zeroed SRAM with the given number of 32-bit words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Flips bit `bit` (0..32) of the word at `address`.
    ///
    /// Fault injection hook for exercising the detection contract.
    pub fn flip_bit(&mut self, address: u32, bit: u32) {
        let idx = self.index(address);
        self.words[idx] ^= 1 << (bit & 31);
    }

    fn index(&self, address: u32) -> usize {
        address as usize % self.words.len()
    }
}

impl BackingStore for SramModel {
    fn read(&self, address: u32) -> u32 {
        self.words[self.index(address)]
    }

    fn write(&mut self, address: u32, data: u32, mask: u8) {
        let idx = self.index(address);
        let mut word = self.words[idx];
        for lane in 0..4 {
            if mask & (1 << lane) != 0 {
                let shift = lane * 8;
                word = (word & !(0xFF << shift)) | (data & (0xFF << shift));
            }
        }
        self.words[idx] = word;
    }

    fn reset(&mut self) {
        self.words.fill(0);
    }
}
