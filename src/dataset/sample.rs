use crate::encoding::bit_vector::BitVector;

/// One labelled example: the encoded integer and its parity (1 = odd).
///
/// The label is always bit 0 of `input`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub input: BitVector,
    pub label: u8,
}

impl Sample {
    pub fn from_bits(input: BitVector) -> Sample {
        let label = input.parity();
        Sample { input, label }
    }
}
