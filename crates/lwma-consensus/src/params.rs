use num_bigint::BigUint;

use crate::constants::{
    LWMA_ADJUST_WEIGHT_MAINNET, LWMA_ADJUST_WEIGHT_REGTEST, LWMA_ADJUST_WEIGHT_TESTNET,
    LWMA_AVERAGING_WINDOW, LWMA_ENABLE_HEIGHT_MAINNET, LWMA_MIN_DENOMINATOR, POW_LIMIT_MAINNET,
    POW_LIMIT_REGTEST, POW_LIMIT_TESTNET, TARGET_SPACING_SECONDS,
};
use crate::error::{ErrorCode, LwmaError};

/// Per-network LWMA configuration.
///
/// `pow_limit` is the easiest allowed target, big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LwmaParams {
    pub enable_height: u32,
    pub testnet: bool,
    pub regtest: bool,
    pub pow_target_spacing: u32,
    pub averaging_window: u32,
    pub adjust_weight: u32,
    pub min_denominator: u32,
    pub solve_time_limitation: bool,
    pub pow_limit: [u8; 32],
}

pub const MAINNET_PARAMS: LwmaParams = LwmaParams {
    enable_height: LWMA_ENABLE_HEIGHT_MAINNET,
    testnet: false,
    regtest: false,
    pow_target_spacing: TARGET_SPACING_SECONDS,
    averaging_window: LWMA_AVERAGING_WINDOW,
    adjust_weight: LWMA_ADJUST_WEIGHT_MAINNET,
    min_denominator: LWMA_MIN_DENOMINATOR,
    solve_time_limitation: true,
    pow_limit: POW_LIMIT_MAINNET,
};

pub const TESTNET_PARAMS: LwmaParams = LwmaParams {
    enable_height: 0,
    testnet: true,
    regtest: false,
    pow_target_spacing: TARGET_SPACING_SECONDS,
    averaging_window: LWMA_AVERAGING_WINDOW,
    adjust_weight: LWMA_ADJUST_WEIGHT_TESTNET,
    min_denominator: LWMA_MIN_DENOMINATOR,
    solve_time_limitation: false,
    pow_limit: POW_LIMIT_TESTNET,
};

pub const REGTEST_PARAMS: LwmaParams = LwmaParams {
    enable_height: 0,
    testnet: false,
    regtest: true,
    pow_target_spacing: TARGET_SPACING_SECONDS,
    averaging_window: LWMA_AVERAGING_WINDOW,
    adjust_weight: LWMA_ADJUST_WEIGHT_REGTEST,
    min_denominator: LWMA_MIN_DENOMINATOR,
    solve_time_limitation: false,
    pow_limit: POW_LIMIT_REGTEST,
};

impl LwmaParams {
    pub fn pow_limit_target(&self) -> BigUint {
        BigUint::from_bytes_be(&self.pow_limit)
    }

    /// Whether LWMA governs the block at `height`.
    pub fn is_active(&self, height: u32) -> bool {
        height >= self.enable_height
    }

    /// Rejects parameter sets that would divide by zero or never retarget.
    pub fn validate(&self) -> Result<(), LwmaError> {
        let zero_field = if self.averaging_window == 0 {
            Some("averaging_window")
        } else if self.adjust_weight == 0 {
            Some("adjust_weight")
        } else if self.min_denominator == 0 {
            Some("min_denominator")
        } else if self.pow_target_spacing == 0 {
            Some("pow_target_spacing")
        } else {
            None
        };

        match zero_field {
            Some(name) => Err(LwmaError::new(
                ErrorCode::RetargetErrParamsInvalid,
                format!("lwma params: {name} must be positive"),
            )),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    pub fn params(self) -> &'static LwmaParams {
        match self {
            Network::Mainnet => &MAINNET_PARAMS,
            Network::Testnet => &TESTNET_PARAMS,
            Network::Regtest => &REGTEST_PARAMS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
        }
    }

    pub fn from_name(name: &str) -> Option<Network> {
        match name {
            "mainnet" => Some(Network::Mainnet),
            "testnet" => Some(Network::Testnet),
            "regtest" => Some(Network::Regtest),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::target_to_bits;

    #[test]
    fn canonical_params_validate() {
        for network in [Network::Mainnet, Network::Testnet, Network::Regtest] {
            assert!(network.params().validate().is_ok(), "{}", network.as_str());
        }
    }

    #[test]
    fn canonical_pow_limit_bits() {
        assert_eq!(target_to_bits(&MAINNET_PARAMS.pow_limit_target()), 0x1f07_ffff);
        assert_eq!(target_to_bits(&TESTNET_PARAMS.pow_limit_target()), 0x1f07_ffff);
        assert_eq!(target_to_bits(&REGTEST_PARAMS.pow_limit_target()), 0x207f_ffff);
    }

    #[test]
    fn network_flags_are_exclusive() {
        assert!(!MAINNET_PARAMS.testnet && !MAINNET_PARAMS.regtest);
        assert!(TESTNET_PARAMS.testnet && !TESTNET_PARAMS.regtest);
        assert!(REGTEST_PARAMS.regtest && !REGTEST_PARAMS.testnet);
    }

    #[test]
    fn enable_height_gates_mainnet_only() {
        assert!(!MAINNET_PARAMS.is_active(LWMA_ENABLE_HEIGHT_MAINNET - 1));
        assert!(MAINNET_PARAMS.is_active(LWMA_ENABLE_HEIGHT_MAINNET));
        assert!(TESTNET_PARAMS.is_active(0));
        assert!(REGTEST_PARAMS.is_active(0));
    }

    #[test]
    fn validate_rejects_zero_fields() {
        let mut p = MAINNET_PARAMS;
        p.min_denominator = 0;
        let err = p.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RetargetErrParamsInvalid);
        assert!(err.msg.contains("min_denominator"));

        let mut p = MAINNET_PARAMS;
        p.averaging_window = 0;
        assert!(p.validate().unwrap_err().msg.contains("averaging_window"));
    }

    #[test]
    fn network_names_round_trip() {
        for network in [Network::Mainnet, Network::Testnet, Network::Regtest] {
            assert_eq!(Network::from_name(network.as_str()), Some(network));
        }
        assert_eq!(Network::from_name("signet"), None);
    }
}
