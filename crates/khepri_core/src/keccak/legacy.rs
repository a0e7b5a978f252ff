//! Legacy Keccak-256, the pre-FIPS padding variant.
//!
//! Identical to SHA3-256 except for the domain-separator byte (`0x01`
//! instead of `0x06`), which is enough to make the two incompatible.
//! Ethereum and other pre-standardization deployments use this variant.
//!
//! Gated behind the default-on `legacy-keccak` feature so builds that only
//! need the FIPS variants can drop it.

use super::params;
use super::sha3::one_shot;
use super::sponge::SpongeContext;

/// Keccak-256 output size in bytes.
pub const KECCAK_256_OUTPUT: usize = 32;

/// Compute the legacy Keccak-256 hash of the input data.
///
/// # Example
///
/// ```
/// use khepri_core::keccak::legacy::keccak_256;
/// use khepri_core::keccak::sha3::sha3_256;
///
/// // Same rate, different domain separator: never the same digest.
/// assert_ne!(keccak_256(b"data"), sha3_256(b"data"));
/// ```
#[inline]
pub fn keccak_256(data: &[u8]) -> [u8; KECCAK_256_OUTPUT] {
    one_shot(params::KECCAK_256, data)
}

/// Streaming legacy Keccak-256 hasher.
#[derive(Clone, Debug)]
pub struct Keccak256 {
    ctx: SpongeContext,
}

impl Keccak256 {
    /// Create a new hasher.
    #[inline]
    pub fn new() -> Self {
        Self {
            ctx: SpongeContext::from_params(params::KECCAK_256),
        }
    }

    /// Feed additional bytes.
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.ctx.absorb(data);
    }

    /// Finalize and return the digest. Consumes `self`.
    #[inline]
    pub fn finalize(mut self) -> [u8; KECCAK_256_OUTPUT] {
        self.ctx.finalize();
        let mut out = [0u8; KECCAK_256_OUTPUT];
        self.ctx.squeeze(&mut out);
        out
    }
}

impl Default for Keccak256 {
    fn default() -> Self {
        Self::new()
    }
}
