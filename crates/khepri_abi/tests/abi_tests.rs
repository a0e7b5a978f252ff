//! Integration tests for the C-callable boundary.
//!
//! These call the exported entry points the way a foreign caller would:
//! raw pointers, caller-owned buffers, status codes checked on every call.

use std::ptr;

use khepri_abi::hash::{
    khepri_keccak_256, khepri_sha3_224, khepri_sha3_256, khepri_sha3_384, khepri_sha3_512,
    khepri_shake128, khepri_shake256,
};
use khepri_abi::{khepri_cpu_flags, khepri_version, khepri_version_string, KhepriStatus};

use khepri_core::keccak::sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
use khepri_core::keccak::shake::shake128;

// ============================================================================
// Version and capability queries
// ============================================================================

#[test]
fn test_version_triple() {
    let v = khepri_version();
    assert_eq!((v.major, v.minor, v.patch), (0, 1, 0));
}

#[test]
fn test_version_string_round_trip() {
    let ptr = khepri_version_string();
    assert!(!ptr.is_null());
    // SAFETY: the ABI guarantees a static NUL-terminated string.
    let s = unsafe { std::ffi::CStr::from_ptr(ptr) };
    assert_eq!(s.to_str().unwrap(), "0.1.0");
}

#[test]
fn test_cpu_flags_queryable_repeatedly() {
    // The contract allows calling this per hash invocation.
    let first = khepri_cpu_flags();
    for _ in 0..1000 {
        assert_eq!(khepri_cpu_flags(), first);
    }
}

// ============================================================================
// Fixed-digest entry points
// ============================================================================

#[test]
fn test_entry_points_match_core() {
    let input = b"boundary and core must agree";

    let mut out28 = [0u8; 28];
    let mut out32 = [0u8; 32];
    let mut out48 = [0u8; 48];
    let mut out64 = [0u8; 64];

    unsafe {
        assert_eq!(
            khepri_sha3_224(input.as_ptr(), input.len(), out28.as_mut_ptr(), 28),
            KhepriStatus::Ok
        );
        assert_eq!(
            khepri_sha3_256(input.as_ptr(), input.len(), out32.as_mut_ptr(), 32),
            KhepriStatus::Ok
        );
        assert_eq!(
            khepri_sha3_384(input.as_ptr(), input.len(), out48.as_mut_ptr(), 48),
            KhepriStatus::Ok
        );
        assert_eq!(
            khepri_sha3_512(input.as_ptr(), input.len(), out64.as_mut_ptr(), 64),
            KhepriStatus::Ok
        );
    }

    assert_eq!(out28, sha3_224(input));
    assert_eq!(out32, sha3_256(input));
    assert_eq!(out48, sha3_384(input));
    assert_eq!(out64, sha3_512(input));
}

#[test]
fn test_empty_input_vectors() {
    let mut out = [0u8; 32];
    let status = unsafe { khepri_sha3_256(ptr::null(), 0, out.as_mut_ptr(), 32) };
    assert_eq!(status, KhepriStatus::Ok);
    assert_eq!(
        hex::encode(out),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );
}

#[cfg(feature = "legacy-keccak")]
#[test]
fn test_legacy_keccak_entry_point() {
    let mut out = [0u8; 32];
    let status = unsafe { khepri_keccak_256(ptr::null(), 0, out.as_mut_ptr(), 32) };
    assert_eq!(status, KhepriStatus::Ok);
    assert_eq!(
        hex::encode(out),
        "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    );
}

#[cfg(not(feature = "legacy-keccak"))]
#[test]
fn test_legacy_keccak_reports_unsupported() {
    let mut out = [0u8; 32];
    let status = unsafe { khepri_keccak_256(ptr::null(), 0, out.as_mut_ptr(), 32) };
    assert_eq!(status, KhepriStatus::Unsupported);
}

// ============================================================================
// Status-code matrix
// ============================================================================

#[test]
fn test_status_matrix() {
    let mut out = [0u8; 64];

    unsafe {
        // Null input, nonzero length.
        assert_eq!(
            khepri_sha3_512(ptr::null(), 1, out.as_mut_ptr(), 64),
            KhepriStatus::NullPointer
        );
        // Null output.
        assert_eq!(
            khepri_sha3_512(b"x".as_ptr(), 1, ptr::null_mut(), 64),
            KhepriStatus::NullPointer
        );
        // Output size off by one in both directions.
        assert_eq!(
            khepri_sha3_512(b"x".as_ptr(), 1, out.as_mut_ptr(), 63),
            KhepriStatus::SizeMismatch
        );
        assert_eq!(
            khepri_sha3_384(b"x".as_ptr(), 1, out.as_mut_ptr(), 64),
            KhepriStatus::SizeMismatch
        );
    }
}

#[test]
fn test_status_values_are_stable() {
    // These integer values are ABI; changing one is a major-version break.
    assert_eq!(KhepriStatus::Ok as i32, 0);
    assert_eq!(KhepriStatus::NullPointer as i32, 1);
    assert_eq!(KhepriStatus::SizeMismatch as i32, 2);
    assert_eq!(KhepriStatus::Unsupported as i32, 3);
    assert_eq!(KhepriStatus::Internal as i32, 4);
}

// ============================================================================
// XOF entry points
// ============================================================================

#[test]
fn test_shake_entry_points_choose_length() {
    let input = b"xof";
    for len in [1usize, 16, 32, 100, 200] {
        let mut out = vec![0u8; len];
        let status =
            unsafe { khepri_shake128(input.as_ptr(), input.len(), out.as_mut_ptr(), len) };
        assert_eq!(status, KhepriStatus::Ok);

        // Prefix of the reference output.
        let reference: [u8; 200] = shake128(input);
        assert_eq!(out[..], reference[..len]);
    }
}

#[test]
fn test_shake256_zero_length_output() {
    let status = unsafe { khepri_shake256(b"xof".as_ptr(), 3, ptr::null_mut(), 0) };
    assert_eq!(status, KhepriStatus::Ok);
}

// ============================================================================
// Determinism across repeated boundary calls
// ============================================================================

#[test]
fn test_repeated_calls_are_deterministic() {
    let input = [0xA5u8; 1000];
    let mut first = [0u8; 32];
    let mut again = [0u8; 32];

    unsafe {
        assert_eq!(
            khepri_sha3_256(input.as_ptr(), input.len(), first.as_mut_ptr(), 32),
            KhepriStatus::Ok
        );
        for _ in 0..10 {
            assert_eq!(
                khepri_sha3_256(input.as_ptr(), input.len(), again.as_mut_ptr(), 32),
                KhepriStatus::Ok
            );
            assert_eq!(first, again);
        }
    }
}
