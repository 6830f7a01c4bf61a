//! Sponge Errors

use thiserror_no_std::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Error type of the sponge crate.
pub enum Error {
    #[error("could not allocate {bytes} bytes for the padded message")]
    AllocationFailure { bytes: usize },

    #[error("{len} bytes is not a whole number of 72-byte blocks")]
    UnalignedInput { len: usize },

    #[error("cannot rotate a 64-bit lane by {amount} bits")]
    InvalidRotationAmount { amount: u32 },
}
