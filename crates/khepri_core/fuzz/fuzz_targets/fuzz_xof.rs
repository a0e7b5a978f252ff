//! Fuzz target for the SHAKE extendable-output functions.
//!
//! Tests that:
//! 1. Split absorb == one absorb
//! 2. Incremental squeeze == one full squeeze
//! 3. Shorter outputs are prefixes of longer ones

#![no_main]

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;

use khepri_core::keccak::shake::{shake128_into, shake256_into, Shake128, Shake256};

#[derive(Debug, Arbitrary)]
struct XofInput {
    data: Vec<u8>,
    split_point: usize,
    output_len: usize,
    squeeze_step: usize,
}

fuzz_target!(|input: XofInput| {
    // Limit sizes to avoid OOM
    if input.data.len() > 4096 {
        return;
    }
    let output_len = (input.output_len % 512).max(1);

    // Property 1: SHAKE256 split absorb == one absorb
    let mut expected = vec![0u8; output_len];
    shake256_into(&input.data, &mut expected);

    if !input.data.is_empty() {
        let split = input.split_point % input.data.len();
        let mut xof = Shake256::new();
        xof.absorb(&input.data[..split]);
        xof.absorb(&input.data[split..]);
        let mut out = vec![0u8; output_len];
        xof.squeeze(&mut out);
        assert_eq!(out, expected, "SHAKE256 split absorb != one absorb");
    }

    // Property 2: incremental squeeze == full squeeze
    let step = (input.squeeze_step % 64).max(1);
    let mut xof = Shake256::new();
    xof.absorb(&input.data);
    let mut incremental = vec![0u8; output_len];
    let mut offset = 0;
    while offset < output_len {
        let take = step.min(output_len - offset);
        xof.squeeze(&mut incremental[offset..offset + take]);
        offset += take;
    }
    assert_eq!(incremental, expected, "SHAKE256 incremental squeeze inconsistent");

    // Property 3: prefix property for SHAKE128
    let mut short = vec![0u8; output_len];
    let mut long = vec![0u8; output_len + 64];
    shake128_into(&input.data, &mut short);
    shake128_into(&input.data, &mut long);
    assert_eq!(short[..], long[..output_len], "SHAKE128 prefix property violated");
});
