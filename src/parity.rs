//! Parity Integrity Store.
//!
//! Single-bit error detection for stored data using an odd-parity code: the
//! stored bit is the inverted reduction-XOR of the 32 data bits, so the
//! total count of set bits across data plus stored bit is always odd for
//! uncorrupted data. Any single-bit flip in the word or in the stored bit
//! is detected; an even number of flips across the two is not (a documented
//! limitation of single-bit parity, not a defect).

/// Reduction XOR of all 32 bits: true iff an odd number of bits are set.
fn parity_of(data: u32) -> bool {
    data.count_ones() % 2 == 1
}

/// Per-address parity bit table with generate and check operations.
///
/// One stored bit per backing-store word. Writes take effect immediately
/// for subsequent reads of the same address; reset clears every entry.
#[derive(Clone, Debug)]
pub struct IntegrityStore {
    bits: Vec<bool>,
}

impl IntegrityStore {
    /// Creates a table with one bit per backing-store word, all cleared.
    pub fn new(words: usize) -> Self {
        Self {
            bits: vec![false; words],
        }
    }

    /// Computes the parity bit to store alongside `data`.
    ///
    /// Inverting the odd-bit-count flag yields the odd-parity code: the set
    /// bits of data plus stored bit always total an odd number.
    pub fn generate(data: u32) -> bool {
        !parity_of(data)
    }

    /// Checks `data` against its stored parity bit.
    ///
    /// # Returns
    ///
    /// True on a mismatch, i.e. when the combined set-bit count is no
    /// longer odd.
    pub fn check(data: u32, stored: bool) -> bool {
        !(parity_of(data) ^ stored)
    }

    /// Stores the parity bit for `address`.
    pub fn write(&mut self, address: u32, bit: bool) {
        let idx = self.index(address);
        self.bits[idx] = bit;
    }

    /// Reads the stored parity bit for `address`.
    pub fn read(&self, address: u32) -> bool {
        self.bits[self.index(address)]
    }

    /// Flips the stored bit at `address`.
    ///
    /// Fault injection hook for exercising the detection contract.
    pub fn flip(&mut self, address: u32) {
        let idx = self.index(address);
        self.bits[idx] = !self.bits[idx];
    }

    /// Clears every entry to 0.
    pub fn reset(&mut self) {
        self.bits.fill(false);
    }

    /// True when no entry is set.
    pub fn is_clear(&self) -> bool {
        self.bits.iter().all(|b| !b)
    }

    fn index(&self, address: u32) -> usize {
        address as usize % self.bits.len()
    }
}
