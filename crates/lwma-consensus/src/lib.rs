pub mod compact;
mod compactsize;
pub mod constants;
pub mod error;
pub mod header;
pub mod lwma;
pub mod params;
pub mod window;
mod wire_read;

pub use compact::{bits_to_target, target_to_bits};
pub use error::{ErrorCode, LwmaError};
pub use header::{parse_header_record, HeaderRecord};
pub use lwma::{lwma_target, next_bits};
pub use params::{LwmaParams, Network, MAINNET_PARAMS, REGTEST_PARAMS, TESTNET_PARAMS};
pub use window::{HeaderChain, HeaderSource, RetargetWindow};

#[cfg(test)]
mod header_tests;
