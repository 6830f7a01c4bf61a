//! SHA3SPONGE
//! ==========
//! The **Keccak-f[1600] permutation** and the **sponge** built on it,
//! parameterised as SHA3-512.
//!
//! ## Parameters
//! * 5 × 5 lanes of 64 bits = 1600-bit state
//! * 72-byte rate (9 lanes), 128-byte capacity
//! * 24 rounds of: θ → ρ/π → χ → ι
//! * 64-byte digest, squeezed from the first 8 lanes
//!
//! ```
//! let digest = sha3sponge::hash(b"abc").unwrap();
//! assert_eq!(digest[..4], [0xb7, 0x51, 0x85, 0x0b]);
//! ```
//!
//! Every call owns its own state, so independent messages can be hashed from
//! any number of threads. With the `parallel` feature, [`hash_batch`] does
//! that on the Rayon pool.
//!
//! The `Keccak` and `Reference` padding rules exist for comparison with the
//! pre-standard Keccak-512 and with the hardware reference model; only
//! [`PaddingRule::Sha3`] yields FIPS 202 digests.

#![no_std]

extern crate alloc;

// Optional multi‑threaded batch API needs `std` + Rayon
#[cfg(feature = "parallel")]
extern crate std;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::vec::Vec;

mod error;
pub mod keccak;
pub mod sponge;

pub use error::{Error, Result};
pub use keccak::{keccak_f1600, State};
pub use sponge::{hash, hash_with, pad, padded_len, PaddingRule, Sponge};

// ---------------------------------------------------------------------------
// Constants & parameters
// ---------------------------------------------------------------------------

/// Bits per lane.
pub const LANE_BITS: u32 = 64;
/// Bytes per lane.
pub const LANE_BYTES: usize = 8;
/// Lanes in the state (5 × 5).
pub const STATE_LANES: usize = 25;
/// Permutation width.
pub const STATE_BITS: usize = STATE_LANES * LANE_BITS as usize;
/// Bytes absorbed per block.
pub const RATE_BYTES: usize = 72;
/// Lanes absorbed per block.
pub const RATE_LANES: usize = RATE_BYTES / LANE_BYTES;
/// State bytes never touched by input or output.
pub const CAPACITY_BYTES: usize = STATE_BITS / 8 - RATE_BYTES;
/// Rounds per permutation.
pub const ROUNDS: usize = 24;
/// Digest length.
pub const OUTPUT_BYTES: usize = 64;

/// A 512-bit digest.
pub type Digest = [u8; OUTPUT_BYTES];

/// Hash many independent messages in **parallel** using Rayon (feature `parallel`).
#[cfg(feature = "parallel")]
pub fn hash_batch(messages: &[&[u8]]) -> Result<Vec<Digest>> {
    messages.par_iter().map(|m| hash(m)).collect()
}
