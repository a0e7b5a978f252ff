//! Constant-time digest comparison.
//!
//! Digest verification (CLI `verify`, callers comparing an expected digest
//! against a recomputed one) should not leak the position of the first
//! mismatching byte. This module wraps the audited `subtle` crate; nothing
//! here is hand-rolled.

use subtle::ConstantTimeEq;

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if and only if `a` and `b` have the same length and
/// contents. The comparison time depends only on the length, not on where
/// the slices first differ. Length itself is treated as public.
#[inline]
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
