//! SHA3-512 sponge
//! ---------------
//! Pad → absorb 72-byte blocks (9 little-endian lanes XORed into the rate,
//! then Keccak-f) → squeeze the first 8 lanes. The 16 capacity lanes never
//! see message data.

use alloc::{borrow::Cow, vec::Vec};
use core::fmt;

use crate::keccak::State;
use crate::{Digest, Error, Result, LANE_BYTES, OUTPUT_BYTES, RATE_BYTES};

// The output fits in one rate's worth of lanes, so squeezing never permutes.
const _: () = assert!(OUTPUT_BYTES <= RATE_BYTES);

/// Final bit of the `pad10*1` rule, on the last byte of the block.
const PAD_LAST: u8 = 0x80;

// ---------------------------------------------------------------------------
// Padding
// ---------------------------------------------------------------------------

/// How a message is padded to a multiple of the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingRule {
    /// FIPS 202 SHA3-512: `0x06 0x00* 0x80`, always at least one pad byte.
    Sha3,
    /// Original Keccak-512: `0x01 0x00* 0x80`, always at least one pad byte.
    Keccak,
    /// `0x01 0x00* 0x80`, but block-aligned messages (including the empty
    /// one) are absorbed unpadded. Not injective; kept for parity with the
    /// hardware reference model.
    Reference,
}

impl Default for PaddingRule {
    fn default() -> Self {
        PaddingRule::Sha3
    }
}

impl PaddingRule {
    /// First pad byte, carrying the domain separation bits.
    pub const fn domain_byte(self) -> u8 {
        match self {
            PaddingRule::Sha3 => 0x06,
            PaddingRule::Keccak | PaddingRule::Reference => 0x01,
        }
    }

    /// Whether a block-aligned message still receives a full pad block.
    pub const fn pads_aligned(self) -> bool {
        !matches!(self, PaddingRule::Reference)
    }
}

impl fmt::Display for PaddingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingRule::Sha3 => f.write_str("sha3"),
            PaddingRule::Keccak => f.write_str("keccak"),
            PaddingRule::Reference => f.write_str("reference"),
        }
    }
}

/// Length of `len` message bytes after padding under `rule`.
pub fn padded_len(len: usize, rule: PaddingRule) -> usize {
    if len % RATE_BYTES == 0 && !rule.pads_aligned() {
        len
    } else {
        (len / RATE_BYTES + 1) * RATE_BYTES
    }
}

/// Pad `msg` to a multiple of [`RATE_BYTES`].
///
/// The message is copied into a fresh buffer unless `rule` leaves it as is.
/// When only one pad byte fits, the domain byte and the final `0x80` share it.
pub fn pad(msg: &[u8], rule: PaddingRule) -> Result<Cow<'_, [u8]>> {
    let len = padded_len(msg.len(), rule);
    if len == msg.len() {
        log::debug!(
            "{} bytes already block-aligned, absorbing unpadded ({} rule)",
            len,
            rule
        );
        return Ok(Cow::Borrowed(msg));
    }

    let mut padded = Vec::new();
    padded
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailure { bytes: len })?;
    padded.extend_from_slice(msg);
    padded.resize(len, 0);
    padded[msg.len()] |= rule.domain_byte();
    padded[len - 1] |= PAD_LAST;
    debug_assert!(padded.len() % RATE_BYTES == 0);
    Ok(Cow::Owned(padded))
}

// ---------------------------------------------------------------------------
// Sponge
// ---------------------------------------------------------------------------

/// Keccak state plus the absorb/squeeze phases over it.
#[derive(Debug, Clone, Default)]
pub struct Sponge {
    state: State,
}

impl Sponge {
    /// Sponge over the all-zero state.
    pub fn new() -> Self {
        Sponge {
            state: State::new(),
        }
    }

    /// Current Keccak state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// XOR one block into the rate lanes, lane `i` = bytes `8i..8i+8` LE.
    fn xor_block(&mut self, block: &[u8; RATE_BYTES]) {
        for (i, word) in block.chunks_exact(LANE_BYTES).enumerate() {
            let mut bytes = [0u8; LANE_BYTES];
            bytes.copy_from_slice(word);
            self.state.xor_lane(i, u64::from_le_bytes(bytes));
        }
    }

    /// Absorb exactly one rate-sized block.
    pub fn absorb_block(&mut self, block: &[u8; RATE_BYTES]) {
        self.xor_block(block);
        self.state.permute();
    }

    /// Absorb an already padded message; returns the number of blocks.
    ///
    /// Fails without touching the state unless `padded` is a whole number
    /// of blocks.
    pub fn absorb(&mut self, padded: &[u8]) -> Result<usize> {
        let unaligned = || Error::UnalignedInput {
            len: padded.len(),
        };
        if padded.len() % RATE_BYTES != 0 {
            return Err(unaligned());
        }

        let mut blocks = 0;
        for block in padded.chunks_exact(RATE_BYTES) {
            let block: &[u8; RATE_BYTES] = block.try_into().map_err(|_| unaligned())?;
            self.absorb_block(block);
            blocks += 1;
        }
        Ok(blocks)
    }

    /// Read the digest from lanes 0..8, each little-endian.
    pub fn squeeze(&self) -> Digest {
        let mut out = [0u8; OUTPUT_BYTES];
        for (chunk, lane) in out.chunks_exact_mut(LANE_BYTES).zip(self.state.lanes()) {
            chunk.copy_from_slice(&lane.to_le_bytes());
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Public hashing API
// ---------------------------------------------------------------------------

/// SHA3-512 digest of `msg`.
pub fn hash(msg: &[u8]) -> Result<Digest> {
    hash_with(msg, PaddingRule::Sha3)
}

/// 512-bit digest of `msg` with the given padding rule.
pub fn hash_with(msg: &[u8], rule: PaddingRule) -> Result<Digest> {
    let mut sponge = Sponge::new();
    let blocks = {
        let padded = pad(msg, rule)?;
        sponge.absorb(&padded)?
    };
    log::trace!(
        "absorbed {} byte message as {} block(s) ({} rule)",
        msg.len(),
        blocks,
        rule
    );
    Ok(sponge.squeeze())
}
