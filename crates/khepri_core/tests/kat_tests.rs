//! Known Answer Tests for the SHA-3, SHAKE, and legacy Keccak variants.
//!
//! Vectors are the standard FIPS 202 test values (empty string and "abc")
//! plus the legacy Keccak-256 vectors used by pre-standardization deployers.
//! A single wrong round constant or rotation offset in the permutation fails
//! every one of these with no other symptom, which is exactly why they exist.

use khepri_core::keccak::sha3::{sha3_224, sha3_256, sha3_384, sha3_512};
use khepri_core::keccak::shake::{shake128, shake256};

#[cfg(feature = "legacy-keccak")]
use khepri_core::keccak::legacy::keccak_256;

/// Decode hex string to bytes
fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex in test vector")
}

// ============================================================================
// SHA-3 fixed digests (FIPS 202)
// ============================================================================

#[test]
fn test_sha3_224_kat() {
    assert_eq!(
        sha3_224(b"").to_vec(),
        hex_decode("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7")
    );
    assert_eq!(
        sha3_224(b"abc").to_vec(),
        hex_decode("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf")
    );
}

#[test]
fn test_sha3_256_kat() {
    assert_eq!(
        sha3_256(b"").to_vec(),
        hex_decode("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
    );
    assert_eq!(
        sha3_256(b"abc").to_vec(),
        hex_decode("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
    );
}

#[test]
fn test_sha3_384_kat() {
    assert_eq!(
        sha3_384(b"").to_vec(),
        hex_decode(
            "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004"
        )
    );
    assert_eq!(
        sha3_384(b"abc").to_vec(),
        hex_decode(
            "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25"
        )
    );
}

#[test]
fn test_sha3_512_kat() {
    assert_eq!(
        sha3_512(b"").to_vec(),
        hex_decode(
            "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
        )
    );
    assert_eq!(
        sha3_512(b"abc").to_vec(),
        hex_decode(
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        )
    );
}

// ============================================================================
// SHAKE XOFs (FIPS 202)
// ============================================================================

#[test]
fn test_shake128_kat() {
    let out: [u8; 32] = shake128(b"");
    assert_eq!(
        out.to_vec(),
        hex_decode("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26")
    );
}

#[test]
fn test_shake256_kat() {
    let out: [u8; 32] = shake256(b"");
    assert_eq!(
        out.to_vec(),
        hex_decode("46b9dd2b0ba88d1323b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f")
    );
}

// ============================================================================
// Legacy Keccak-256
// ============================================================================

#[cfg(feature = "legacy-keccak")]
#[test]
fn test_keccak_256_kat() {
    assert_eq!(
        keccak_256(b"").to_vec(),
        hex_decode("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
    );
    assert_eq!(
        keccak_256(b"abc").to_vec(),
        hex_decode("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45")
    );
}

// ============================================================================
// Structural checks
// ============================================================================

#[test]
fn test_fixed_output_lengths_regardless_of_input() {
    for input in [&b""[..], &[0u8; 1], &[0u8; 136], &[0u8; 1000]] {
        assert_eq!(sha3_224(input).len(), 28);
        assert_eq!(sha3_256(input).len(), 32);
        assert_eq!(sha3_384(input).len(), 48);
        assert_eq!(sha3_512(input).len(), 64);
    }
}

#[test]
fn test_avalanche() {
    // Flipping one input bit should change roughly half the digest bits.
    let base = [0u8; 64];
    let mut flipped = base;
    flipped[17] ^= 0x10;

    let a = sha3_256(&base);
    let b = sha3_256(&flipped);
    let differing: u32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones())
        .sum();

    // 256-bit digest: accept 30%..70% as the sanity band.
    assert!(
        (77..=179).contains(&differing),
        "avalanche failure: {} of 256 bits changed",
        differing
    );
}
