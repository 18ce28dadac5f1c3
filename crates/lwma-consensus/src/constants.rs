pub const TARGET_SPACING_SECONDS: u32 = 600;

pub const LWMA_AVERAGING_WINDOW: u32 = 45;
pub const LWMA_ADJUST_WEIGHT_MAINNET: u32 = 13_772;
pub const LWMA_ADJUST_WEIGHT_TESTNET: u32 = 13_632;
pub const LWMA_ADJUST_WEIGHT_REGTEST: u32 = 13_772;
pub const LWMA_MIN_DENOMINATOR: u32 = 10;

pub const LWMA_ENABLE_HEIGHT_MAINNET: u32 = 536_200;

// Solve times above this multiple of the target spacing are clamped when
// solve time limitation is enabled.
pub const SOLVE_TIME_CLAMP_SPACINGS: i64 = 6;
// Testnet resets to the pow limit after this many spacings without a block.
pub const TESTNET_RESET_SPACINGS: i64 = 2;

// Mantissa bit reserved as a sign bit by the compact encoding.
pub const COMPACT_SIGN_BIT: u32 = 0x0080_0000;
pub const COMPACT_MANTISSA_MASK: u32 = 0x007f_ffff;

pub const POW_LIMIT_MAINNET: [u8; 32] = [
    0x00, 0x07, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];
pub const POW_LIMIT_TESTNET: [u8; 32] = POW_LIMIT_MAINNET;
pub const POW_LIMIT_REGTEST: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

// Serialized header: version | prev_block | merkle_root | height |
// reserved[7] | timestamp | bits | nonce[32] | varbytes solution.
pub const HEADER_HEIGHT_OFFSET: usize = 68;
pub const HEADER_RESERVED_WORDS: usize = 7;
pub const HEADER_FIXED_BYTES: usize = 140;
pub const MAX_SOLUTION_SIZE: u64 = 1344;
