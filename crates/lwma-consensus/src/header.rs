use crate::compactsize::read_compact_size;
use crate::constants::{HEADER_HEIGHT_OFFSET, HEADER_RESERVED_WORDS, MAX_SOLUTION_SIZE};
use crate::error::{ErrorCode, LwmaError};
use crate::wire_read::Reader;

/// The header fields a retarget reads: height, timestamp (unix seconds as
/// carried on the wire) and compact difficulty bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeaderRecord {
    pub height: u32,
    pub timestamp: u32,
    pub bits: u32,
}

impl HeaderRecord {
    pub fn new(height: u32, timestamp: u32, bits: u32) -> Self {
        Self {
            height,
            timestamp,
            bits,
        }
    }
}

/// Extracts a [`HeaderRecord`] from a serialized block header and returns it
/// along with the number of bytes the header occupies.
///
/// The whole header, Equihash solution included, is walked so that a truncated
/// or oversized encoding is rejected even though only three fields are kept.
pub fn parse_header_record(b: &[u8]) -> Result<(HeaderRecord, usize), LwmaError> {
    let mut r = Reader::new(b);

    // version | prev_block | merkle_root
    r.read_bytes(HEADER_HEIGHT_OFFSET)?;
    let height = r.read_u32_le()?;
    for _ in 0..HEADER_RESERVED_WORDS {
        r.read_u32_le()?;
    }
    let timestamp = r.read_u32_le()?;
    let bits = r.read_u32_le()?;
    // nonce
    r.read_bytes(32)?;

    let solution_len = read_compact_size(&mut r)?;
    if solution_len > MAX_SOLUTION_SIZE {
        return Err(LwmaError::new(
            ErrorCode::HeaderErrParse,
            format!("solution length {solution_len} exceeds {MAX_SOLUTION_SIZE}"),
        ));
    }
    r.read_bytes(solution_len as usize)?;

    Ok((
        HeaderRecord {
            height,
            timestamp,
            bits,
        },
        r.offset(),
    ))
}
