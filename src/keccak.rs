//! Keccak-f[1600] permutation
//! --------------------------
//! 24 rounds over a 5 × 5 array of 64-bit lanes. Each round is
//! θ (column parity + diffusion) → ρ/π (rotate and relocate) → χ (the only
//! nonlinear step) → ι (round constant into lane (0, 0)).
//!
//! The state is a flat `[u64; 25]`; lane `(x, y)` lives at index `x + 5y`.

use crate::{Error, Result, LANE_BITS, ROUNDS, STATE_LANES};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// ι round constants, one per round index.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// ρ rotation offsets, indexed `[x][y]`.
pub const RHO_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];

// Every offset must be a valid rotation of a 64-bit lane.
const _: () = {
    let mut i = 0;
    while i < STATE_LANES {
        assert!(RHO_OFFSETS[i % 5][i / 5] < LANE_BITS);
        i += 1;
    }
};

// ---------------------------------------------------------------------------
// Index & rotation helpers
// ---------------------------------------------------------------------------

/// `a mod 5`, always in `0..5` (also for negative `a`).
#[inline(always)]
pub const fn mod5(a: isize) -> usize {
    a.rem_euclid(5) as usize
}

/// Flat index of lane `(x, y)`.
#[inline(always)]
pub const fn lane_index(x: usize, y: usize) -> usize {
    x + 5 * y
}

#[inline(always)]
fn rotl(lane: u64, amount: u32) -> u64 {
    debug_assert!(amount < LANE_BITS, "rotation by {} bits", amount);
    if amount == 0 {
        lane
    } else {
        (lane << amount) | (lane >> (LANE_BITS - amount))
    }
}

/// Rotate `lane` left by `amount` bits, rejecting amounts of 64 or more.
pub fn rotate_lane(lane: u64, amount: u32) -> Result<u64> {
    if amount >= LANE_BITS {
        return Err(Error::InvalidRotationAmount { amount });
    }
    Ok(rotl(lane, amount))
}

// ---------------------------------------------------------------------------
// Round steps
// ---------------------------------------------------------------------------

/// θ: XOR every lane with the parities of its two neighbouring columns.
pub fn theta(a: &mut [u64; STATE_LANES]) {
    let mut c = [0u64; 5];
    for (x, parity) in c.iter_mut().enumerate() {
        *parity = (0..5).fold(0, |acc, y| acc ^ a[lane_index(x, y)]);
    }

    for x in 0..5 {
        let d = c[mod5(x as isize - 1)] ^ rotl(c[mod5(x as isize + 1)], 1);
        for y in 0..5 {
            a[lane_index(x, y)] ^= d;
        }
    }
}

/// ρ and π fused: `B[y][2x + 3y] = rotl(A[x][y], r[x][y])`.
pub fn rho_pi(a: &[u64; STATE_LANES]) -> [u64; STATE_LANES] {
    let mut b = [0u64; STATE_LANES];
    for x in 0..5 {
        for y in 0..5 {
            let to = lane_index(y, mod5((2 * x + 3 * y) as isize));
            b[to] = rotl(a[lane_index(x, y)], RHO_OFFSETS[x][y]);
        }
    }
    b
}

/// χ: `A[x][y] = B[x][y] ^ (!B[x+1][y] & B[x+2][y])`.
pub fn chi(a: &mut [u64; STATE_LANES], b: &[u64; STATE_LANES]) {
    for y in 0..5 {
        for x in 0..5 {
            let x1 = mod5(x as isize + 1);
            let x2 = mod5(x as isize + 2);
            a[lane_index(x, y)] =
                b[lane_index(x, y)] ^ (!b[lane_index(x1, y)] & b[lane_index(x2, y)]);
        }
    }
}

/// ι: XOR the round constant into lane (0, 0).
#[inline(always)]
pub fn iota(a: &mut [u64; STATE_LANES], round: usize) {
    a[0] ^= ROUND_CONSTANTS[round];
}

/// One full round with round index `round` (0..24).
pub fn round(a: &mut [u64; STATE_LANES], round: usize) {
    theta(a);
    let b = rho_pi(a);
    chi(a, &b);
    iota(a, round);
}

/// The full 24-round permutation, in place.
pub fn keccak_f1600(a: &mut [u64; STATE_LANES]) {
    for r in 0..ROUNDS {
        round(a, r);
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// 1600-bit Keccak state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State([u64; STATE_LANES]);

impl State {
    /// All-zero state.
    pub const fn new() -> Self {
        State([0; STATE_LANES])
    }

    /// State with lane `(x, y)` taken from `lanes[x + 5y]`.
    pub const fn from_lanes(lanes: [u64; STATE_LANES]) -> Self {
        State(lanes)
    }

    /// All 25 lanes in `x + 5y` order.
    pub fn lanes(&self) -> &[u64; STATE_LANES] {
        &self.0
    }

    /// Lane `(x, y)`.
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        self.0[lane_index(x, y)]
    }

    /// XOR `word` into the lane at flat index `i`.
    #[inline(always)]
    pub fn xor_lane(&mut self, i: usize, word: u64) {
        self.0[i] ^= word;
    }

    /// Apply Keccak-f[1600].
    pub fn permute(&mut self) {
        keccak_f1600(&mut self.0);
    }
}

// -----------------------------------------------------------------------
//  TESTS
// -----------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod5_wraps_negative_offsets() {
        assert_eq!(mod5(-1), 4);
        assert_eq!(mod5(-2), 3);
        assert_eq!(mod5(-5), 0);
        assert_eq!(mod5(-6), 4);
        assert_eq!(mod5(0), 0);
        assert_eq!(mod5(5), 0);
        assert_eq!(mod5(7), 2);
        for x in 0..5isize {
            assert!(mod5(x - 1) < 5 && mod5(x + 2) < 5);
        }
    }

    #[test]
    fn test_lane_index_covers_state() {
        let mut seen = [false; STATE_LANES];
        for x in 0..5 {
            for y in 0..5 {
                let i = lane_index(x, y);
                assert!(!seen[i], "lane ({}, {}) maps to a taken index {}", x, y, i);
                seen[i] = true;
                assert_eq!((i % 5, i / 5), (x, y));
            }
        }
    }

    #[test]
    fn test_rotation() {
        assert_eq!(rotl(0x8000_0000_0000_0001, 0), 0x8000_0000_0000_0001);
        assert_eq!(rotl(0x8000_0000_0000_0001, 1), 0x0000_0000_0000_0003);
        assert_eq!(rotate_lane(1, 63), Ok(0x8000_0000_0000_0000));
        assert_eq!(
            rotate_lane(1, 64),
            Err(Error::InvalidRotationAmount { amount: 64 })
        );
    }

    /// Rebuild ι constants from the x⁸+x⁶+x⁵+x⁴+1 LFSR.
    #[test]
    fn test_round_constants_match_lfsr() {
        fn rc_bit(t: usize) -> u64 {
            let mut r: u16 = 1;
            for _ in 0..(t % 255) {
                r <<= 1;
                if r & 0x100 != 0 {
                    r ^= 0x171;
                }
            }
            (r & 1) as u64
        }

        for (i, &expected) in ROUND_CONSTANTS.iter().enumerate() {
            let mut rc = 0u64;
            for j in 0..7 {
                rc |= rc_bit(j + 7 * i) << ((1 << j) - 1);
            }
            assert_eq!(rc, expected, "round constant {} mismatch", i);
        }
    }

    /// Rebuild ρ offsets by walking (x, y) -> (y, 2x + 3y) from (1, 0).
    #[test]
    fn test_rho_offsets_match_walk() {
        assert_eq!(RHO_OFFSETS[0][0], 0);
        let (mut x, mut y) = (1usize, 0usize);
        for t in 0..24u32 {
            assert_eq!(
                RHO_OFFSETS[x][y],
                ((t + 1) * (t + 2) / 2) % 64,
                "offset at ({}, {})",
                x,
                y
            );
            let next = (y, (2 * x + 3 * y) % 5);
            x = next.0;
            y = next.1;
        }
    }

    #[test]
    fn test_theta_single_bit_diffusion() {
        let mut a = [0u64; STATE_LANES];
        a[lane_index(0, 0)] = 1;
        theta(&mut a);

        // Lane (0,0) keeps its bit, columns 1 and 4 pick up the parity of column 0.
        let touched: usize = a.iter().filter(|&&l| l != 0).count();
        assert_eq!(touched, 11);
        for y in 0..5 {
            assert_eq!(a[lane_index(1, y)], 1);
            assert_eq!(a[lane_index(4, y)], 2);
            assert_eq!(a[lane_index(2, y)], 0);
            assert_eq!(a[lane_index(3, y)], 0);
        }
    }

    #[test]
    fn test_rho_pi_is_a_bijection() {
        // Lane i carries i + 1 set bits; rotation keeps the popcount.
        let mut a = [0u64; STATE_LANES];
        for (i, lane) in a.iter_mut().enumerate() {
            *lane = (1u64 << (i + 1)) - 1;
        }
        let b = rho_pi(&a);

        let mut seen = [false; STATE_LANES];
        for lane in b.iter() {
            let ones = lane.count_ones() as usize;
            assert!(ones >= 1 && !seen[ones - 1]);
            seen[ones - 1] = true;
        }
        // (0,0) stays in place, unrotated.
        assert_eq!(b[0], a[0]);
    }

    #[test]
    fn test_chi_and_iota() {
        let mut a = [0u64; STATE_LANES];
        chi(&mut a, &[0u64; STATE_LANES]);
        assert_eq!(a, [0u64; STATE_LANES]);

        // B[x+1] = 0 and B[x+2] = all ones flips B[x].
        let mut b = [0u64; STATE_LANES];
        b[lane_index(2, 3)] = u64::MAX;
        chi(&mut a, &b);
        assert_eq!(a[lane_index(0, 3)], u64::MAX);
        assert_eq!(a[lane_index(2, 3)], u64::MAX);
        assert_eq!(a[lane_index(1, 3)], 0);

        let mut z = [0u64; STATE_LANES];
        iota(&mut z, 23);
        assert_eq!(z[0], ROUND_CONSTANTS[23]);
        assert!(z[1..].iter().all(|&l| l == 0));
    }

    #[test]
    fn test_permutation_of_zero_state() {
        let once = State::from_lanes([
            0xF1258F7940E1DDE7, 0x84D5CCF933C0478A, 0xD598261EA65AA9EE, 0xBD1547306F80494D,
            0x8B284E056253D057, 0xFF97A42D7F8E6FD4, 0x90FEE5A0A44647C4, 0x8C5BDA0CD6192E76,
            0xAD30A6F71B19059C, 0x30935AB7D08FFC64, 0xEB5AA93F2317D635, 0xA9A6E6260D712103,
            0x81A57C16DBCF555F, 0x43B831CD0347C826, 0x01F22F1A11A5569F, 0x05E5635A21D9AE61,
            0x64BEFEF28CC970F2, 0x613670957BC46611, 0xB87C5A554FD00ECB, 0x8C3EE88A1CCF32C8,
            0x940C7922AE3A2614, 0x1841F924A2C509E4, 0x16F53526E70465C2, 0x75F644E97F30A13B,
            0xEAF1FF7B5CECA249,
        ]);
        let mut st = State::new();
        st.permute();
        assert_eq!(st, once);

        // A second application, to catch errors that cancel on the zero state.
        st.permute();
        assert_eq!(st.lane(0, 0), 0x2D5C954DF96ECB3C);
        assert_eq!(st.lane(4, 4), 0x20D06CD26A8FBF5C);
    }
}
