//! # khepri_abi
//!
//! The externally callable boundary for the Khepri hashing primitives:
//! version and CPU-capability queries plus one-shot hash entry points with a
//! plain C calling convention.
//!
//! ## Ownership convention
//!
//! Every buffer crossing this boundary is **caller-owned for its full
//! lifetime**; nothing here allocates, retains, or frees caller memory.
//! This is deliberately the opposite of callee-allocating surfaces (such as
//! erasure-codec or Merkle-proof builders) that hand out buffers with a
//! matching free call. The two conventions must not be mixed: unifying them
//! would silently change the memory-safety obligations of existing callers.
//!
//! ## Stability
//!
//! The exported symbols and their signatures are append-only within a minor
//! or patch release; removing or changing one requires a major bump of
//! [`version::MAJOR`].
//!
//! ## Errors
//!
//! Entry points return [`KhepriStatus`](hash::KhepriStatus). All failures
//! are caller-correctable (a missing pointer, a wrong buffer size, a
//! variant compiled out); on any non-zero status the output buffer contents
//! are undefined. `Internal` exists for defensive completeness and is
//! unreachable in a correct build.
//!
//! This is the only Khepri crate that uses `unsafe`: the raw-pointer views
//! at the FFI edge, each validated and documented at the call site.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// CPU feature detection (query-only; selects nothing)
pub mod cpu;

/// One-shot hash entry points and status codes
pub mod hash;

/// ABI version reporting
pub mod version;

pub use cpu::{khepri_cpu_flags, KhepriCpuFlags};
pub use hash::KhepriStatus;
pub use version::{khepri_version, khepri_version_string, KhepriVersion};
