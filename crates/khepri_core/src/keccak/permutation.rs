//! The Keccak-f\[1600\] permutation.
//!
//! The state is 25 lanes of 64 bits, a 5x5 matrix addressed as
//! `state[5 * y + x]` (x varies fastest). Each of the 24 rounds applies, in
//! order: theta (column-parity diffusion), rho/pi (per-lane rotation and
//! relocation), chi (the row-wise nonlinear step), and iota (round-constant
//! injection into lane (0,0)).
//!
//! The round constants and the rho/pi tables are fixed by the standard and
//! must be reproduced bit-for-bit; a single wrong entry yields a permutation
//! that is still a permutation but hashes nothing interoperably. The tables
//! below match FIPS 202.
//!
//! Written as a plain loop over the constant tables. The classic unrolled
//! per-lane-register form is a tuning artifact of old C compilers; the
//! optimizer handles this shape fine, and the loop keeps the four steps
//! recognizable.

use crate::bytes::rotl64;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// State width in bytes (1600 bits).
pub const STATE_BYTES: usize = 200;

/// Number of rounds in Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Round constants for the iota step, one per round.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082,
    0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001,
    0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088,
    0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b,
    0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080,
    0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080,
    0x0000000080000001, 0x8000000080008008,
];

/// Rotation offsets for the rho step, in pi-cycle order starting from
/// lane (1,0). Lane (0,0) is never rotated or moved.
const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14,
    27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Destination lane indices for the pi step, forming a single 24-lane cycle
/// that starts at lane (1,0).
const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4,
    15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the full 24-round Keccak-f\[1600\] permutation in place.
///
/// Total and pure: no allocation, no error conditions, no effect beyond the
/// state mutation. Control flow never depends on state contents.
pub fn keccak_f1600(state: &mut [u64; LANES]) {
    for &rc in ROUND_CONSTANTS.iter() {
        // Theta: XOR each lane with the parities of two neighboring columns.
        let mut parity = [0u64; 5];
        for x in 0..5 {
            parity[x] =
                state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = parity[(x + 4) % 5] ^ rotl64(parity[(x + 1) % 5], 1);
            for y in 0..5 {
                state[5 * y + x] ^= d;
            }
        }

        // Rho and pi, fused: walk the 24-lane cycle, rotating each lane as
        // it moves to its new position.
        let mut carried = state[1];
        for i in 0..24 {
            let dst = PI_LANES[i];
            let next = state[dst];
            state[dst] = rotl64(carried, RHO_OFFSETS[i]);
            carried = next;
        }

        // Chi: the only nonlinear step, row by row.
        for y in 0..5 {
            let row = [
                state[5 * y],
                state[5 * y + 1],
                state[5 * y + 2],
                state[5 * y + 3],
                state[5 * y + 4],
            ];
            for x in 0..5 {
                state[5 * y + x] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // Iota: break round symmetry in lane (0,0).
        state[0] ^= rc;
    }
}
