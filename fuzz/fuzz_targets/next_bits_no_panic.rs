#![no_main]

use libfuzzer_sys::fuzz_target;
use lwma_consensus::{next_bits, HeaderRecord, LwmaParams, RetargetWindow, MAINNET_PARAMS};

const BASE_HEIGHT: u32 = 100;

// Arbitrary parameters and header history: next_bits may fail but must not
// panic, and two calls on the same input must agree.
fuzz_target!(|data: &[u8]| {
    // 8 bytes of parameters, 4 of next timestamp, then (timestamp, bits) pairs.
    if data.len() < 12 {
        return;
    }

    let flags = data[0];
    let params = LwmaParams {
        enable_height: 0,
        testnet: flags & 1 != 0,
        regtest: flags & 2 != 0,
        solve_time_limitation: flags & 4 != 0,
        averaging_window: u32::from(data[1] % 64),
        adjust_weight: u32::from(u16::from_le_bytes([data[2], data[3]])),
        min_denominator: u32::from(data[4]),
        pow_target_spacing: u32::from(u16::from_le_bytes([data[5], data[6]])),
        pow_limit: if flags & 8 != 0 {
            [0xff; 32]
        } else {
            MAINNET_PARAMS.pow_limit
        },
    };
    let skip = data[7];
    let timestamp = u32::from_le_bytes(data[8..12].try_into().unwrap());

    let mut headers = Vec::new();
    for (i, chunk) in data[12..].chunks_exact(8).enumerate() {
        if i == usize::from(skip) {
            continue;
        }
        headers.push(HeaderRecord::new(
            BASE_HEIGHT + i as u32,
            u32::from_le_bytes(chunk[..4].try_into().unwrap()),
            u32::from_le_bytes(chunk[4..].try_into().unwrap()),
        ));
    }
    let height = BASE_HEIGHT + (data.len() - 12) as u32 / 8;
    let window = RetargetWindow::new(&headers);

    let r1 = next_bits(height, timestamp, &window, &params);
    let r2 = next_bits(height, timestamp, &window, &params);
    assert_eq!(r1, r2, "next_bits non-deterministic");
});
