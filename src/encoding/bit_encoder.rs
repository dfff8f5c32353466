//! Integer to little-endian bit vector conversion.
//!
//! `encode` keeps only the low `length` bits of its input: a value that needs
//! more bits is silently reduced modulo `2^length`. Use `encode_exact` when
//! losing high-order bits must be an error instead.

use crate::encoding::bit_vector::BitVector;
use crate::errors::ParityError;

/// Encodes `n` into `length` little-endian bits.
///
/// Divides by two, writing each remainder into the next position starting at
/// index 0, until `n` reaches zero or all positions are filled. Unfilled
/// positions stay zero.
///
/// # Errors
/// `InvalidArgument` if `n` is negative or `length` is zero.
pub fn encode(n: i64, length: usize) -> Result<BitVector, ParityError> {
    check_args(n, length)?;

    let mut bits = vec![0u8; length];
    let mut rest = n as u64;
    let mut index = 0;
    while rest != 0 && index < length {
        bits[index] = (rest % 2) as u8;
        rest /= 2;
        index += 1;
    }
    Ok(BitVector::from_bits(bits))
}

/// Like `encode`, but refuses values that need more than `length` bits.
///
/// # Errors
/// `InvalidArgument` as for `encode`; `Overflow` if `n >= 2^length`.
pub fn encode_exact(n: i64, length: usize) -> Result<BitVector, ParityError> {
    check_args(n, length)?;
    if !fits_in(n, length) {
        return Err(ParityError::Overflow { value: n, width: length });
    }
    encode(n, length)
}

/// Interprets `bits` as a little-endian unsigned integer.
///
/// Only the low 64 positions contribute; anything above cannot be represented
/// in a `u64` and is never set by `encode`.
pub fn decode(bits: &BitVector) -> u64 {
    bits.bits()
        .iter()
        .take(u64::BITS as usize)
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (u64::from(b) << i))
}

/// Whether a non-negative `n` is representable in `width` bits without loss.
pub fn fits_in(n: i64, width: usize) -> bool {
    if n < 0 {
        return false;
    }
    let needed = (u64::BITS - (n as u64).leading_zeros()) as usize;
    needed <= width
}

fn check_args(n: i64, length: usize) -> Result<(), ParityError> {
    if n < 0 {
        return Err(ParityError::invalid_argument(format!(
            "cannot encode negative value {n}"
        )));
    }
    if length == 0 {
        return Err(ParityError::invalid_argument("encoding length must be positive"));
    }
    Ok(())
}
