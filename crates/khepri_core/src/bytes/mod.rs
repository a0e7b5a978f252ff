//! Byte manipulation utilities for the sponge core.
//!
//! The permutation state is an array of 64-bit lanes, but absorb/squeeze
//! treat it as a little-endian byte buffer. These helpers do the lane/byte
//! conversions without `unsafe` casts.

/// Try to load a 64-bit little-endian lane from a byte slice.
///
/// Returns `None` if the slice is shorter than 8 bytes.
#[inline]
pub fn try_load_le64(bytes: &[u8]) -> Option<u64> {
    if bytes.len() < 8 {
        return None;
    }
    Some(u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ]))
}

/// Load a 64-bit little-endian lane from a byte slice.
///
/// # Panics
/// Panics if the slice is shorter than 8 bytes.
///
/// For a non-panicking version, use [`try_load_le64`].
#[inline]
pub fn load_le64(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Try to store a 64-bit lane as little-endian bytes.
///
/// Returns `false` if the slice is shorter than 8 bytes.
#[inline]
pub fn try_store_le64(lane: u64, bytes: &mut [u8]) -> bool {
    if bytes.len() < 8 {
        return false;
    }
    bytes[..8].copy_from_slice(&lane.to_le_bytes());
    true
}

/// Store a 64-bit lane as little-endian bytes.
///
/// # Panics
/// Panics if the slice is shorter than 8 bytes.
///
/// For a non-panicking version, use [`try_store_le64`].
#[inline]
pub fn store_le64(lane: u64, bytes: &mut [u8]) {
    bytes[..8].copy_from_slice(&lane.to_le_bytes());
}

/// Rotate a 64-bit lane left by `n` bits.
#[inline]
pub const fn rotl64(lane: u64, n: u32) -> u64 {
    lane.rotate_left(n)
}

/// Rotate a 64-bit lane right by `n` bits.
#[inline]
pub const fn rotr64(lane: u64, n: u32) -> u64 {
    lane.rotate_right(n)
}
