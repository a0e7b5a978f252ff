//! CPU feature detection.
//!
//! Query-only: these flags report what the host supports so callers can
//! pick their own strategies (or just log them). Nothing in Khepri
//! dispatches on them; the portable permutation is the single code path
//! and the reference any accelerated implementation must match
//! byte-for-byte.
//!
//! All queries are pure, side-effect-free, and cheap enough to call per
//! hash invocation; `std` caches the underlying detection.

/// True if the CPU supports AVX2 (x86/x86_64 only).
#[inline]
pub fn has_avx2() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("avx2")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        false
    }
}

/// True if the CPU has SHA hash instructions (x86 SHA-NI or ARMv8 SHA2).
#[inline]
pub fn has_sha() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        std::arch::is_x86_feature_detected!("sha")
    }
    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("sha2")
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
    {
        false
    }
}

/// True if the CPU supports NEON (aarch64 only).
#[inline]
pub fn has_neon() -> bool {
    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("neon")
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        false
    }
}

/// True if the CPU has ARMv8.2 SHA-3 instructions (EOR3/RAX1/XAR/BCAX).
#[inline]
pub fn has_sha3() -> bool {
    #[cfg(target_arch = "aarch64")]
    {
        std::arch::is_aarch64_feature_detected!("sha3")
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        false
    }
}

/// CPU capability flags with a fixed C layout.
///
/// Booleans are carried as `u8` (0 or 1) so the struct layout is identical
/// from every language.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KhepriCpuFlags {
    /// AVX2 vector extension available.
    pub avx2: u8,
    /// SHA hash instructions available.
    pub sha: u8,
    /// NEON vector extension available.
    pub neon: u8,
    /// SHA-3 instructions available.
    pub sha3: u8,
}

/// Return the host CPU capability flags.
///
/// Pure and side-effect-free; may be queried on every call.
#[no_mangle]
pub extern "C" fn khepri_cpu_flags() -> KhepriCpuFlags {
    KhepriCpuFlags {
        avx2: has_avx2() as u8,
        sha: has_sha() as u8,
        neon: has_neon() as u8,
        sha3: has_sha3() as u8,
    }
}
