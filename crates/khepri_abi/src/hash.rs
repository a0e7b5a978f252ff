//! One-shot hash entry points.
//!
//! Every entry point has the same shape: `(input, input_len, out, out_len)`
//! in, [`KhepriStatus`] out. The fixed digests require `out_len` to equal
//! the variant's digest size exactly; the SHAKE entry points treat
//! `out_len` as the requested XOF output length. `input` may be null only
//! when `input_len` is zero. All buffers are caller-owned; nothing is
//! allocated or retained on this surface.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::slice;

use khepri_core::keccak::sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
use khepri_core::keccak::shake::{shake128_into, shake256_into};

#[cfg(feature = "legacy-keccak")]
use khepri_core::keccak::legacy::keccak_256;

/// Status code returned by every hash entry point.
///
/// All non-`Ok` codes are caller-correctable; no retry semantics apply to a
/// pure computation. On any non-`Ok` return the output buffer contents are
/// undefined and must not be used.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KhepriStatus {
    /// The digest was written to the output buffer.
    Ok = 0,
    /// A required pointer was null.
    NullPointer = 1,
    /// A supplied length does not match what the operation expects.
    SizeMismatch = 2,
    /// The requested variant is not compiled into this build.
    Unsupported = 3,
    /// Defensive catch-all; unreachable in a correct build.
    Internal = 4,
}

/// View caller input as a slice. Null is accepted only for empty input.
///
/// # Safety
/// If non-null, `input` must point to `input_len` readable bytes that stay
/// valid and unmodified for the duration of the call.
unsafe fn input_slice<'a>(input: *const u8, input_len: usize) -> Result<&'a [u8], KhepriStatus> {
    if input_len == 0 {
        return Ok(&[]);
    }
    if input.is_null() {
        return Err(KhepriStatus::NullPointer);
    }
    // SAFETY: non-null with `input_len` readable bytes per the caller contract.
    Ok(unsafe { slice::from_raw_parts(input, input_len) })
}

/// Shared body of the fixed-digest entry points.
///
/// # Safety
/// Pointer/length pairs must satisfy the entry-point contract.
unsafe fn hash_fixed<const N: usize>(
    input: *const u8,
    input_len: usize,
    out: *mut u8,
    out_len: usize,
    variant: fn(&[u8]) -> [u8; N],
) -> KhepriStatus {
    let data = match unsafe { input_slice(input, input_len) } {
        Ok(data) => data,
        Err(status) => return status,
    };
    if out.is_null() {
        return KhepriStatus::NullPointer;
    }
    if out_len != N {
        return KhepriStatus::SizeMismatch;
    }
    // SAFETY: non-null with `out_len` writable bytes per the caller contract.
    let out = unsafe { slice::from_raw_parts_mut(out, out_len) };

    match catch_unwind(AssertUnwindSafe(|| variant(data))) {
        Ok(digest) => {
            out.copy_from_slice(&digest);
            KhepriStatus::Ok
        }
        Err(_) => KhepriStatus::Internal,
    }
}

/// Shared body of the XOF entry points; `out_len` is the requested output
/// length and zero is a valid (no-op) request.
///
/// # Safety
/// Pointer/length pairs must satisfy the entry-point contract.
unsafe fn hash_xof(
    input: *const u8,
    input_len: usize,
    out: *mut u8,
    out_len: usize,
    variant: fn(&[u8], &mut [u8]),
) -> KhepriStatus {
    let data = match unsafe { input_slice(input, input_len) } {
        Ok(data) => data,
        Err(status) => return status,
    };
    if out_len == 0 {
        return KhepriStatus::Ok;
    }
    if out.is_null() {
        return KhepriStatus::NullPointer;
    }
    // SAFETY: non-null with `out_len` writable bytes per the caller contract.
    let out = unsafe { slice::from_raw_parts_mut(out, out_len) };

    match catch_unwind(AssertUnwindSafe(|| variant(data, out))) {
        Ok(()) => KhepriStatus::Ok,
        Err(_) => KhepriStatus::Internal,
    }
}

macro_rules! fixed_entry {
    ($(#[$doc:meta])* $name:ident, $variant:path, $len:expr) => {
        $(#[$doc])*
        ///
        /// `out_len` must equal the digest size; `input` may be null only if
        /// `input_len` is zero. Returns [`KhepriStatus::Ok`] on success.
        ///
        /// # Safety
        /// `input`, if non-null, must point to `input_len` readable bytes.
        /// `out`, if non-null, must point to `out_len` writable bytes. Both
        /// regions must stay valid for the duration of the call.
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            input: *const u8,
            input_len: usize,
            out: *mut u8,
            out_len: usize,
        ) -> KhepriStatus {
            // SAFETY: forwarded caller contract.
            unsafe { hash_fixed::<{ $len }>(input, input_len, out, out_len, $variant) }
        }
    };
}

fixed_entry!(
    /// SHA3-224: writes a 28-byte digest.
    khepri_sha3_224,
    sha3_224,
    28
);

fixed_entry!(
    /// SHA3-256: writes a 32-byte digest.
    khepri_sha3_256,
    sha3_256,
    32
);

fixed_entry!(
    /// SHA3-384: writes a 48-byte digest.
    khepri_sha3_384,
    sha3_384,
    48
);

fixed_entry!(
    /// SHA3-512: writes a 64-byte digest.
    khepri_sha3_512,
    sha3_512,
    64
);

#[cfg(feature = "legacy-keccak")]
fixed_entry!(
    /// Legacy Keccak-256 (pre-FIPS padding): writes a 32-byte digest.
    khepri_keccak_256,
    keccak_256,
    32
);

/// Legacy Keccak-256 stub for builds without the `legacy-keccak` feature.
///
/// Always returns [`KhepriStatus::Unsupported`]; the output buffer is not
/// touched.
///
/// # Safety
/// No pointer is dereferenced.
#[cfg(not(feature = "legacy-keccak"))]
#[no_mangle]
pub unsafe extern "C" fn khepri_keccak_256(
    _input: *const u8,
    _input_len: usize,
    _out: *mut u8,
    _out_len: usize,
) -> KhepriStatus {
    KhepriStatus::Unsupported
}

/// SHAKE128: writes `out_len` bytes of XOF output.
///
/// # Safety
/// Same pointer contract as the fixed-digest entry points.
#[no_mangle]
pub unsafe extern "C" fn khepri_shake128(
    input: *const u8,
    input_len: usize,
    out: *mut u8,
    out_len: usize,
) -> KhepriStatus {
    // SAFETY: forwarded caller contract.
    unsafe { hash_xof(input, input_len, out, out_len, shake128_into) }
}

/// SHAKE256: writes `out_len` bytes of XOF output.
///
/// # Safety
/// Same pointer contract as the fixed-digest entry points.
#[no_mangle]
pub unsafe extern "C" fn khepri_shake256(
    input: *const u8,
    input_len: usize,
    out: *mut u8,
    out_len: usize,
) -> KhepriStatus {
    // SAFETY: forwarded caller contract.
    unsafe { hash_xof(input, input_len, out, out_len, shake256_into) }
}
