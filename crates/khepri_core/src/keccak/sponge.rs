//! The streaming sponge construction over Keccak-f\[1600\].
//!
//! A [`SpongeContext`] is a plain value type: the 1600-bit state, a rate, a
//! cursor into the rate window, and the one-byte domain separator applied at
//! finalization. The lifecycle is absorb zero or more times, finalize
//! exactly once, then squeeze zero or more times. Finalizing twice or
//! absorbing after finalization is a caller programming error; the debug
//! assertions here catch it in test builds but nothing security-relevant
//! depends on them.
//!
//! Two invariants define correct streaming behavior and are exercised hard
//! by the property tests:
//!
//! - **Chunk independence**: the state after absorbing depends only on the
//!   concatenation of all absorbed bytes, never on call boundaries.
//! - **Squeeze consistency**: squeezing `k` then `n - k` bytes equals
//!   squeezing `n` bytes at once, for every split point.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::permutation::{keccak_f1600, LANES, STATE_BYTES};
use crate::bytes::{load_le64, store_le64};

/// A streaming Keccak sponge.
///
/// The context owns its state; it is `Clone`, holds no heap memory, and
/// zeroizes on drop. Independent contexts never share mutable state, so
/// concurrent use across threads needs no locking.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SpongeContext {
    /// 25 little-endian lanes; byte `i` of the state lives in lane `i / 8`
    /// at bit offset `8 * (i % 8)`.
    state: [u64; LANES],
    /// Absorb/squeeze window size in bytes; `1..=200`.
    rate: usize,
    /// Cursor into the rate window; `0 <= pos < rate` between operations
    /// (absorb keeps it strict; squeeze may leave `pos == rate` until the
    /// next call permutes).
    pos: usize,
    /// Domain separator XORed in at finalization.
    delim: u8,
}

impl SpongeContext {
    /// Create a sponge with the given rate (in bytes) and domain separator.
    ///
    /// The state starts zeroed and the cursor at 0.
    ///
    /// # Preconditions
    /// `0 < rate <= 200`. The capacity (`200 - rate`) is the security
    /// margin; a rate outside this range is a programming error, not a
    /// runtime condition, and is only debug-asserted.
    #[inline]
    pub fn new(rate: usize, delim: u8) -> Self {
        debug_assert!(rate > 0 && rate <= STATE_BYTES, "rate out of range");
        Self {
            state: [0u64; LANES],
            rate,
            pos: 0,
            delim,
        }
    }

    /// Create a sponge from a named parameter record.
    #[inline]
    pub fn from_params(params: super::params::Params) -> Self {
        Self::new(params.rate, params.delim)
    }

    /// The rate window size in bytes.
    #[inline]
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// XOR input into the rate window, permuting whenever the window fills.
    ///
    /// May be called any number of times before [`finalize`](Self::finalize);
    /// zero-length input is a no-op. The resulting state depends only on the
    /// concatenation of everything absorbed so far.
    pub fn absorb(&mut self, input: &[u8]) {
        debug_assert!(self.pos < self.rate, "absorb after squeeze");
        let mut off = 0;
        while off < input.len() {
            let take = (self.rate - self.pos).min(input.len() - off);
            self.xor_into_window(&input[off..off + take]);
            off += take;
            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
        }
    }

    /// Apply the pad10*1 multi-rate padding and the final permutation.
    ///
    /// XORs the domain separator at the current cursor and `0x80` into the
    /// last byte of the rate window, permutes once, and resets the cursor so
    /// squeezing starts at the beginning of the window. Must be called
    /// exactly once per context.
    pub fn finalize(&mut self) {
        debug_assert!(self.pos < self.rate, "finalize after squeeze");
        self.xor_byte(self.pos, self.delim);
        self.xor_byte(self.rate - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.pos = 0;
    }

    /// Copy output bytes from the rate window, permuting whenever the window
    /// is exhausted.
    ///
    /// May be called repeatedly; the output stream is identical no matter
    /// how it is split across calls. Only valid after
    /// [`finalize`](Self::finalize).
    pub fn squeeze(&mut self, output: &mut [u8]) {
        let mut off = 0;
        while off < output.len() {
            if self.pos == self.rate {
                keccak_f1600(&mut self.state);
                self.pos = 0;
            }
            let take = (self.rate - self.pos).min(output.len() - off);
            self.copy_from_window(&mut output[off..off + take]);
            off += take;
        }
    }

    /// XOR `chunk` into the window at the cursor. Caller guarantees the
    /// chunk fits in the remaining window.
    fn xor_into_window(&mut self, chunk: &[u8]) {
        debug_assert!(chunk.len() <= self.rate - self.pos);
        let mut i = 0;
        // Lane-aligned fast path.
        while self.pos % 8 == 0 && chunk.len() - i >= 8 {
            self.state[self.pos / 8] ^= load_le64(&chunk[i..]);
            self.pos += 8;
            i += 8;
        }
        while i < chunk.len() {
            self.xor_byte(self.pos, chunk[i]);
            self.pos += 1;
            i += 1;
        }
    }

    /// Copy window bytes at the cursor into `out`. Caller guarantees the
    /// request fits in the remaining window.
    fn copy_from_window(&mut self, out: &mut [u8]) {
        debug_assert!(out.len() <= self.rate - self.pos);
        let mut i = 0;
        while self.pos % 8 == 0 && out.len() - i >= 8 {
            store_le64(self.state[self.pos / 8], &mut out[i..]);
            self.pos += 8;
            i += 8;
        }
        while i < out.len() {
            out[i] = (self.state[self.pos / 8] >> (8 * (self.pos % 8))) as u8;
            self.pos += 1;
            i += 1;
        }
    }

    /// XOR a single byte into the little-endian byte view of the state.
    #[inline]
    fn xor_byte(&mut self, index: usize, byte: u8) {
        self.state[index / 8] ^= u64::from(byte) << (8 * (index % 8));
    }
}

/// Censored: the state is not printable.
impl core::fmt::Debug for SpongeContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpongeContext")
            .field("rate", &self.rate)
            .field("pos", &self.pos)
            .field("delim", &self.delim)
            .field("state", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keccak::params;

    fn digest_of(chunks: &[&[u8]]) -> [u8; 32] {
        let p = params::SHA3_256;
        let mut ctx = SpongeContext::new(p.rate, p.delim);
        for chunk in chunks {
            ctx.absorb(chunk);
        }
        ctx.finalize();
        let mut out = [0u8; 32];
        ctx.squeeze(&mut out);
        out
    }

    #[test]
    fn test_chunk_independence() {
        let data: &[u8] = b"the quick brown fox jumps over the lazy dog";
        let whole = digest_of(&[data]);
        assert_eq!(whole, digest_of(&[&data[..1], &data[1..]]));
        assert_eq!(whole, digest_of(&[&data[..20], &[], &data[20..]]));
        let sevens: Vec<&[u8]> = data.chunks(7).collect();
        assert_eq!(whole, digest_of(&sevens));
    }

    #[test]
    fn test_chunk_independence_at_rate_boundary() {
        let p = params::SHA3_256;
        let data = [0xAB_u8; 300];
        let whole = digest_of(&[&data[..]]);
        // Split exactly on, one before, and one after the rate boundary.
        for split in [p.rate - 1, p.rate, p.rate + 1] {
            assert_eq!(whole, digest_of(&[&data[..split], &data[split..]]));
        }
    }

    #[test]
    fn test_squeeze_split_consistency() {
        let p = params::SHAKE256;
        let mut whole = SpongeContext::new(p.rate, p.delim);
        whole.absorb(b"xof input");
        whole.finalize();
        let mut expected = [0u8; 200];
        whole.squeeze(&mut expected);

        for split in [0usize, 1, 31, 136, 137, 199, 200] {
            let mut ctx = SpongeContext::new(p.rate, p.delim);
            ctx.absorb(b"xof input");
            ctx.finalize();
            let mut out = [0u8; 200];
            ctx.squeeze(&mut out[..split]);
            ctx.squeeze(&mut out[split..]);
            assert_eq!(out, expected, "split at {}", split);
        }
    }

    #[test]
    fn test_empty_input_matches_known_vector() {
        // SHA3-256("") from FIPS 202.
        let expected = [
            0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
            0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
            0x80, 0xf8, 0x43, 0x4a,
        ];
        assert_eq!(digest_of(&[]), expected);
    }

    #[test]
    fn test_clone_is_independent() {
        let p = params::SHAKE128;
        let mut a = SpongeContext::new(p.rate, p.delim);
        a.absorb(b"shared prefix");
        let mut b = a.clone();

        a.absorb(b" then a");
        b.absorb(b" then b");
        a.finalize();
        b.finalize();

        let mut out_a = [0u8; 16];
        let mut out_b = [0u8; 16];
        a.squeeze(&mut out_a);
        b.squeeze(&mut out_b);
        assert_ne!(out_a, out_b);
    }
}
