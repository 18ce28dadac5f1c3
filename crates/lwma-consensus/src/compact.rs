//! Compact "bits" encoding of a 256-bit target.
//!
//! The encoding is base-256 scientific notation: the top byte is the length of
//! the target in bytes and the low 23 bits are the leading mantissa bytes. Bit
//! 23 is reserved as a sign bit and is never set by [`target_to_bits`].
//!
//! The two directions are not inverses. Encoding keeps only three significant
//! bytes and decoding of small sizes truncates the mantissa itself, exactly as
//! the historic consensus encoding does.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::constants::{COMPACT_MANTISSA_MASK, COMPACT_SIGN_BIT};

/// Expands compact bits into a target.
///
/// Total over all `u32` inputs: the sign bit is masked off and no range check is
/// applied to the size byte, so a malformed value still decodes to some target.
pub fn bits_to_target(bits: u32) -> BigUint {
    let size = bits >> 24;
    let word = BigUint::from(bits & COMPACT_MANTISSA_MASK);

    if size <= 3 {
        word >> (8 * (3 - size))
    } else {
        word << (8 * (size - 3))
    }
}

/// Packs a target into compact bits, dropping everything below the three most
/// significant bytes.
pub fn target_to_bits(target: &BigUint) -> u32 {
    let mut size = target.bits().div_ceil(8);

    let mantissa = if size <= 3 {
        target << (8 * (3 - size))
    } else {
        target >> (8 * (size - 3))
    };
    // The shifted value always fits in three bytes.
    let mut compact = mantissa.to_u32().unwrap_or(0);

    if compact & COMPACT_SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }

    ((size << 24) | u64::from(compact)) as u32
}
