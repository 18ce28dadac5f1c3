#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((h, n)) = lwma_consensus::parse_header_record(data) {
        assert!(n <= data.len());
        // Bytes after the header must not influence the result.
        let (h2, n2) = lwma_consensus::parse_header_record(&data[..n]).unwrap();
        assert_eq!(h, h2);
        assert_eq!(n, n2);
    }
});
