//! # khepri_core
//!
//! Portable Keccak-f\[1600\] permutation, sponge construction, and the
//! standard digest/XOF variants built on top of them.
//!
//! The crate is deliberately small: one permutation, one streaming sponge
//! context, and a set of constant parameter records naming the standard
//! variants. Everything else (one-shot helpers, streaming digest types, the
//! SHAKE XOFs) is a thin composition of those three pieces.
//!
//! | Variant | Rate (bytes) | Domain separator | Output (bytes) |
//! |---------|--------------|------------------|----------------|
//! | Keccak-256 (legacy) | 136 | `0x01` | 32 |
//! | SHA3-224 | 144 | `0x06` | 28 |
//! | SHA3-256 | 136 | `0x06` | 32 |
//! | SHA3-384 | 104 | `0x06` | 48 |
//! | SHA3-512 | 72  | `0x06` | 64 |
//! | SHAKE128 | 168 | `0x1F` | caller-chosen |
//! | SHAKE256 | 136 | `0x1F` | caller-chosen |
//!
//! All operations are synchronous, allocation-free, and deterministic: the
//! digest of a byte sequence depends only on its content, never on how it
//! was chunked across `update`/`absorb` calls or which thread ran them.
//! Contexts are plain value types with no shared state, so concurrent use
//! from independent threads needs no coordination.
//!
//! Sponge contexts zeroize their state on drop. Beyond keeping the
//! permutation free of data-dependent branches, no constant-time guarantees
//! are made; hashing input is not treated as secret.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all)]

pub use subtle;
pub use zeroize;

/// Byte manipulation utilities (little-endian lane load/store, XOR, rotation)
pub mod bytes;

/// Constant-time digest comparison - uses the audited `subtle` crate
pub mod ct;

/// Keccak-f\[1600\], the sponge construction, and the SHA3/SHAKE variants
pub mod keccak;

/// Prelude with commonly used types
pub mod prelude {
    // Permutation and sponge
    pub use crate::keccak::permutation::keccak_f1600;
    pub use crate::keccak::sponge::SpongeContext;

    // Parameter records
    pub use crate::keccak::params::Params;

    // One-shot hashing
    #[cfg(feature = "legacy-keccak")]
    pub use crate::keccak::legacy::keccak_256;
    pub use crate::keccak::sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
    pub use crate::keccak::shake::{shake128, shake256};

    // Streaming digests and XOFs
    #[cfg(feature = "legacy-keccak")]
    pub use crate::keccak::legacy::Keccak256;
    pub use crate::keccak::sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
    pub use crate::keccak::shake::{Shake128, Shake256};

    // Constant-time comparison
    pub use crate::ct::ct_eq;
}
