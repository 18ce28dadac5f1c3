#![no_main]

use libfuzzer_sys::fuzz_target;
use lwma_consensus::{bits_to_target, target_to_bits};
use num_bigint::BigUint;

// Decode must be total, encode must never round a target up, and bits produced
// by encode must survive another decode/encode pass unchanged.
fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let bits = u32::from_le_bytes(data[..4].try_into().unwrap());
    let t = bits_to_target(bits);
    let b1 = target_to_bits(&t);
    if t.bits() <= 256 {
        assert_eq!(
            target_to_bits(&bits_to_target(b1)),
            b1,
            "encode not idempotent for {bits:#010x}"
        );
    }

    let rest = &data[4..];
    if rest.len() > 32 {
        return;
    }
    let target = BigUint::from_bytes_be(rest);
    let back = bits_to_target(target_to_bits(&target));
    assert!(back <= target, "decode(encode(t)) rounded up");
});
