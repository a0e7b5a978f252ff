//! Parameter records for the standard sponge variants.
//!
//! A variant is nothing more than a (rate, domain separator, output length)
//! triple; these are plain immutable constants, not runtime objects. The
//! capacity of every variant is `200 - rate` bytes and is never touched by
//! absorb or squeeze.

/// A named sponge parameterization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Absorb/squeeze window in bytes, `1..=200`.
    pub rate: usize,
    /// Domain-separator byte applied at finalization.
    pub delim: u8,
    /// Digest length in bytes; 0 for the XOF variants, where the caller
    /// chooses per call.
    pub output_len: usize,
}

/// Domain separator for the FIPS 202 SHA-3 digests.
pub const DELIM_SHA3: u8 = 0x06;

/// Domain separator for the SHAKE extendable-output functions.
pub const DELIM_SHAKE: u8 = 0x1F;

/// Domain separator for pre-FIPS legacy Keccak.
pub const DELIM_KECCAK: u8 = 0x01;

/// Legacy Keccak-256: the pre-standardization padding with a 256-bit digest.
pub const KECCAK_256: Params = Params {
    rate: 136,
    delim: DELIM_KECCAK,
    output_len: 32,
};

/// SHA3-224 (FIPS 202).
pub const SHA3_224: Params = Params {
    rate: 144,
    delim: DELIM_SHA3,
    output_len: 28,
};

/// SHA3-256 (FIPS 202).
pub const SHA3_256: Params = Params {
    rate: 136,
    delim: DELIM_SHA3,
    output_len: 32,
};

/// SHA3-384 (FIPS 202).
pub const SHA3_384: Params = Params {
    rate: 104,
    delim: DELIM_SHA3,
    output_len: 48,
};

/// SHA3-512 (FIPS 202).
pub const SHA3_512: Params = Params {
    rate: 72,
    delim: DELIM_SHA3,
    output_len: 64,
};

/// SHAKE128 XOF (FIPS 202); output length is chosen by the caller.
pub const SHAKE128: Params = Params {
    rate: 168,
    delim: DELIM_SHAKE,
    output_len: 0,
};

/// SHAKE256 XOF (FIPS 202); output length is chosen by the caller.
pub const SHAKE256: Params = Params {
    rate: 136,
    delim: DELIM_SHAKE,
    output_len: 0,
};
