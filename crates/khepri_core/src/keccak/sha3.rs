//! The four fixed-length SHA-3 digests (FIPS 202).
//!
//! Each variant is a one-shot function plus a streaming type over the same
//! [`SpongeContext`]. The streaming types are true sponges, not buffering
//! shims: `update` absorbs directly and memory use is constant regardless
//! of input size.

use super::params::{self, Params};
use super::sponge::SpongeContext;

/// SHA3-224 output size in bytes.
pub const SHA3_224_OUTPUT: usize = 28;

/// SHA3-256 output size in bytes.
pub const SHA3_256_OUTPUT: usize = 32;

/// SHA3-384 output size in bytes.
pub const SHA3_384_OUTPUT: usize = 48;

/// SHA3-512 output size in bytes.
pub const SHA3_512_OUTPUT: usize = 64;

/// init -> absorb everything -> finalize -> squeeze a fixed digest.
#[inline]
pub(crate) fn one_shot<const N: usize>(params: Params, data: &[u8]) -> [u8; N] {
    debug_assert_eq!(params.output_len, N);
    let mut ctx = SpongeContext::from_params(params);
    ctx.absorb(data);
    ctx.finalize();
    let mut out = [0u8; N];
    ctx.squeeze(&mut out);
    out
}

/// Compute the SHA3-224 hash of the input data.
#[inline]
pub fn sha3_224(data: &[u8]) -> [u8; SHA3_224_OUTPUT] {
    one_shot(params::SHA3_224, data)
}

/// Compute the SHA3-256 hash of the input data.
///
/// # Example
///
/// ```
/// use khepri_core::keccak::sha3::sha3_256;
///
/// let hash = sha3_256(b"hello world");
/// assert_eq!(hash.len(), 32);
/// ```
#[inline]
pub fn sha3_256(data: &[u8]) -> [u8; SHA3_256_OUTPUT] {
    one_shot(params::SHA3_256, data)
}

/// Compute the SHA3-384 hash of the input data.
#[inline]
pub fn sha3_384(data: &[u8]) -> [u8; SHA3_384_OUTPUT] {
    one_shot(params::SHA3_384, data)
}

/// Compute the SHA3-512 hash of the input data.
#[inline]
pub fn sha3_512(data: &[u8]) -> [u8; SHA3_512_OUTPUT] {
    one_shot(params::SHA3_512, data)
}

macro_rules! sha3_streaming {
    ($(#[$doc:meta])* $name:ident, $params:expr, $output:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name {
            ctx: SpongeContext,
        }

        impl $name {
            /// Create a new hasher.
            #[inline]
            pub fn new() -> Self {
                Self {
                    ctx: SpongeContext::from_params($params),
                }
            }

            /// Feed additional bytes.
            ///
            /// The digest depends only on the concatenation of all updates,
            /// never on how input was split across calls.
            #[inline]
            pub fn update(&mut self, data: &[u8]) {
                self.ctx.absorb(data);
            }

            /// Finalize and return the digest. Consumes `self`, so a context
            /// cannot be finalized twice or updated afterwards.
            #[inline]
            pub fn finalize(mut self) -> [u8; $output] {
                self.ctx.finalize();
                let mut out = [0u8; $output];
                self.ctx.squeeze(&mut out);
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

sha3_streaming!(
    /// Streaming SHA3-224 hasher.
    Sha3_224,
    params::SHA3_224,
    SHA3_224_OUTPUT
);

sha3_streaming!(
    /// Streaming SHA3-256 hasher.
    ///
    /// # Example
    ///
    /// ```
    /// use khepri_core::keccak::sha3::{sha3_256, Sha3_256};
    ///
    /// let mut hasher = Sha3_256::new();
    /// hasher.update(b"hello ");
    /// hasher.update(b"world");
    /// assert_eq!(hasher.finalize(), sha3_256(b"hello world"));
    /// ```
    Sha3_256,
    params::SHA3_256,
    SHA3_256_OUTPUT
);

sha3_streaming!(
    /// Streaming SHA3-384 hasher.
    Sha3_384,
    params::SHA3_384,
    SHA3_384_OUTPUT
);

sha3_streaming!(
    /// Streaming SHA3-512 hasher.
    Sha3_512,
    params::SHA3_512,
    SHA3_512_OUTPUT
);
