pub mod parity_error;

pub use parity_error::ParityError;
