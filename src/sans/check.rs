//! Helpers for the two's-complement record checksum.

/// Running sum of the decoded bytes of a record.
///
/// The sum is kept wide and only truncated to its low byte when validated. A
/// record is intact when the sum, including the transmitted checksum byte, is
/// zero modulo 256.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Checksum(u32);

impl Checksum {
    /// Accumulate a single byte.
    pub fn add(&mut self, b: u8) {
        self.0 = self.0.wrapping_add(b as u32);
    }

    /// Whether the low byte of the sum is zero.
    pub fn is_valid(&self) -> bool {
        self.0 & 0xFF == 0
    }

    /// The low byte of the sum.
    pub fn low_byte(&self) -> u8 {
        self.0 as u8
    }
}

/// Compute the checksum byte that completes a record of the given bytes.
///
/// `r` holds the decoded byte count, address, record type and payload bytes.
pub fn compute_checksum(r: &[u8]) -> u8 {
    let sum = r.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    sum.wrapping_neg()
}
