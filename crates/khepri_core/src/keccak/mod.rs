//! Keccak-f\[1600\], the sponge construction, and the standard variants.
//!
//! Layering, bottom up:
//!
//! - [`permutation`]: the 24-round Keccak-f\[1600\] permutation over 25
//!   64-bit lanes. Pure, total, in-place.
//! - [`sponge`]: [`SpongeContext`](sponge::SpongeContext), the streaming
//!   absorb/finalize/squeeze state machine parameterized by rate and domain
//!   separator.
//! - [`params`]: the constant (rate, delimiter, output length) records
//!   naming the standard variants.
//! - [`sha3`], [`shake`], [`legacy`]: one-shot helpers and streaming
//!   digest/XOF types for the named variants.
//!
//! Every variant is the same permutation plus a parameter record; nothing
//! in this module dispatches on CPU features or build configuration. The
//! portable permutation here is the reference implementation that any
//! accelerated path elsewhere must match byte-for-byte.

pub mod params;
pub mod permutation;
pub mod sponge;

#[cfg(feature = "legacy-keccak")]
pub mod legacy;
pub mod sha3;
pub mod shake;

// Re-export the main entry points at module level for convenience
#[cfg(feature = "legacy-keccak")]
pub use legacy::keccak_256;
pub use sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
pub use shake::{shake128, shake256, Shake128, Shake256};
pub use sponge::SpongeContext;
