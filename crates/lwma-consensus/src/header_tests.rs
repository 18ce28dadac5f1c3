use crate::constants::{HEADER_FIXED_BYTES, MAX_SOLUTION_SIZE};
use crate::error::ErrorCode;
use crate::header::{parse_header_record, HeaderRecord};

fn header_bytes(height: u32, timestamp: u32, bits: u32, solution: &[u8]) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&0x2000_0000u32.to_le_bytes()); // version
    b.extend_from_slice(&[0x11; 32]); // prev_block
    b.extend_from_slice(&[0x22; 32]); // merkle_root
    b.extend_from_slice(&height.to_le_bytes());
    b.extend_from_slice(&[0u8; 28]); // reserved
    b.extend_from_slice(&timestamp.to_le_bytes());
    b.extend_from_slice(&bits.to_le_bytes());
    b.extend_from_slice(&[0x33; 32]); // nonce
    if solution.len() < 0xfd {
        b.push(solution.len() as u8);
    } else {
        b.push(0xfd);
        b.extend_from_slice(&(solution.len() as u16).to_le_bytes());
    }
    b.extend_from_slice(solution);
    b
}

#[test]
fn parse_header_record_extracts_fields() {
    let b = header_bytes(536_200, 1_514_764_800, 0x1d00_ffff, &[]);
    let (h, n) = parse_header_record(&b).unwrap();
    assert_eq!(h, HeaderRecord::new(536_200, 1_514_764_800, 0x1d00_ffff));
    assert_eq!(n, HEADER_FIXED_BYTES + 1);
}

#[test]
fn parse_header_record_consumes_solution() {
    let solution = vec![0xab; 1344];
    let mut b = header_bytes(7, 100, 0x1f07_ffff, &solution);
    let want = b.len();
    b.extend_from_slice(&[0xee; 5]); // trailing data belongs to the next message
    let (h, n) = parse_header_record(&b).unwrap();
    assert_eq!(h.height, 7);
    assert_eq!(h.bits, 0x1f07_ffff);
    assert_eq!(n, want);
}

#[test]
fn parse_header_record_truncated() {
    let b = header_bytes(1, 2, 3, &[0u8; 10]);
    for cut in [0, 70, HEADER_FIXED_BYTES, b.len() - 1] {
        let err = parse_header_record(&b[..cut]).unwrap_err();
        assert_eq!(err.code, ErrorCode::HeaderErrParse, "cut at {cut}");
    }
}

#[test]
fn parse_header_record_solution_too_large() {
    let solution = vec![0u8; MAX_SOLUTION_SIZE as usize + 1];
    let b = header_bytes(1, 2, 3, &solution);
    let err = parse_header_record(&b).unwrap_err();
    assert_eq!(err.code, ErrorCode::HeaderErrParse);
    assert!(err.msg.contains("exceeds"));
}

#[test]
fn parse_header_record_non_minimal_solution_length() {
    let mut b = header_bytes(1, 2, 3, &[]);
    // Replace the single-byte length 0x00 with 0xfd 0x00 0x00.
    b.truncate(HEADER_FIXED_BYTES);
    b.extend_from_slice(&[0xfd, 0x00, 0x00]);
    let err = parse_header_record(&b).unwrap_err();
    assert_eq!(err.code, ErrorCode::HeaderErrParse);
    assert_eq!(err.to_string(), "HEADER_ERR_PARSE: non-minimal CompactSize");
}
