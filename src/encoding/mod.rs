pub mod bit_encoder;
pub mod bit_vector;

pub use bit_encoder::{decode, encode, encode_exact, fits_in};
pub use bit_vector::BitVector;
