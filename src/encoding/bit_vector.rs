use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Fixed-length little-endian binary vector: index 0 holds the
/// least-significant bit. Every element is 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitVector {
    bits: Vec<u8>,
}

impl BitVector {
    /// Wraps raw bits. Any non-zero value is stored as 1.
    pub fn from_bits(bits: Vec<u8>) -> BitVector {
        let bits = bits.into_iter().map(|b| u8::from(b != 0)).collect();
        BitVector { bits }
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit 0, i.e. the parity of the encoded integer (1 = odd).
    pub fn parity(&self) -> u8 {
        self.bits.first().copied().unwrap_or(0)
    }

    /// Network-ready row: each bit as 0.0 or 1.0.
    pub fn to_f64_row(&self) -> Vec<f64> {
        self.bits.iter().map(|&b| f64::from(b)).collect()
    }
}

impl Index<usize> for BitVector {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bits[index]
    }
}
