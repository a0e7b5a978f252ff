//! SHAKE128 and SHAKE256 extendable-output functions (FIPS 202).
//!
//! Unlike the fixed digests, a SHAKE context stays usable after the first
//! squeeze: sequential squeezes continue the output stream, and squeezing
//! `k` then `n - k` bytes yields the same bytes as squeezing `n` at once.

use super::params::{self, Params};
use super::sponge::SpongeContext;

/// Fill `out` with SHAKE128 output for `data`.
#[inline]
pub fn shake128_into(data: &[u8], out: &mut [u8]) {
    xof_into(params::SHAKE128, data, out);
}

/// Fill `out` with SHAKE256 output for `data`.
#[inline]
pub fn shake256_into(data: &[u8], out: &mut [u8]) {
    xof_into(params::SHAKE256, data, out);
}

/// Compute SHAKE128 with a fixed-size output.
#[inline]
pub fn shake128<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    shake128_into(data, &mut out);
    out
}

/// Compute SHAKE256 with a fixed-size output.
///
/// # Example
///
/// ```
/// use khepri_core::keccak::shake::shake256;
///
/// let output: [u8; 32] = shake256(b"test");
/// let longer: [u8; 64] = shake256(b"test");
/// // An XOF's shorter output is a prefix of its longer output.
/// assert_eq!(output, longer[..32]);
/// ```
#[inline]
pub fn shake256<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    shake256_into(data, &mut out);
    out
}

#[inline]
fn xof_into(params: Params, data: &[u8], out: &mut [u8]) {
    let mut ctx = SpongeContext::from_params(params);
    ctx.absorb(data);
    ctx.finalize();
    ctx.squeeze(out);
}

macro_rules! shake_streaming {
    ($(#[$doc:meta])* $name:ident, $params:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name {
            ctx: SpongeContext,
            finalized: bool,
        }

        impl $name {
            /// Create a new XOF context.
            #[inline]
            pub fn new() -> Self {
                Self {
                    ctx: SpongeContext::from_params($params),
                    finalized: false,
                }
            }

            /// Absorb input data.
            ///
            /// Calling this after the first squeeze is a programming error
            /// (debug-asserted); an XOF cannot return to the absorb phase.
            #[inline]
            pub fn absorb(&mut self, data: &[u8]) {
                debug_assert!(!self.finalized, "absorb after squeeze");
                self.ctx.absorb(data);
            }

            /// Squeeze the next `output.len()` bytes of the stream.
            ///
            /// The first call pads and finalizes the absorb phase. Repeated
            /// calls continue the stream: squeezing 16 then 16 bytes gives
            /// the same 32 bytes as a single 32-byte squeeze.
            #[inline]
            pub fn squeeze(&mut self, output: &mut [u8]) {
                if !self.finalized {
                    self.ctx.finalize();
                    self.finalized = true;
                }
                self.ctx.squeeze(output);
            }

            /// Squeeze the next `N` bytes as an array.
            #[inline]
            pub fn squeeze_fixed<const N: usize>(&mut self) -> [u8; N] {
                let mut out = [0u8; N];
                self.squeeze(&mut out);
                out
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

shake_streaming!(
    /// Incremental SHAKE128 XOF.
    Shake128,
    params::SHAKE128
);

shake_streaming!(
    /// Incremental SHAKE256 XOF.
    ///
    /// # Example
    ///
    /// ```
    /// use khepri_core::keccak::shake::{shake256, Shake256};
    ///
    /// let mut xof = Shake256::new();
    /// xof.absorb(b"test ");
    /// xof.absorb(b"input");
    /// let out: [u8; 32] = xof.squeeze_fixed();
    /// assert_eq!(out, shake256(b"test input"));
    /// ```
    Shake256,
    params::SHAKE256
);
