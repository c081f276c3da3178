//! Pool snapshot configuration
//!
//! Reserves travel as decimal strings so that full 256-bit balances survive
//! TOML, whose integers stop at 64 bits. The fee can be written as an exact
//! ratio, in basis points, or as a decimal percentage:
//!
//! ```toml
//! reserve_in = "1_000_000_000_000"
//! reserve_out = "500_000_000_000_000_000_000"
//!
//! [fee]
//! bps = 30
//! ```

use crate::error::{QuoteError, Result};
use crate::fee::FeeRate;
use crate::pool_state::PoolState;
use anyhow::Context;
use ethereum_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Fee parameters in any of the accepted notations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FeeConfig {
    /// `numerator / denominator`, both decimal strings
    Ratio {
        numerator: String,
        denominator: String,
    },
    /// Basis points (30 = 0.3%)
    Bps { bps: u32 },
    /// Percentage such as `"0.3"`
    Percent { percent: Decimal },
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self::Bps {
            bps: FeeRate::DEFAULT_BPS,
        }
    }
}

impl FeeConfig {
    pub fn to_fee_rate(&self) -> Result<FeeRate> {
        match self {
            Self::Ratio {
                numerator,
                denominator,
            } => FeeRate::new(
                parse_field("fee numerator", numerator)?,
                parse_field("fee denominator", denominator)?,
            ),
            Self::Bps { bps } => FeeRate::from_bps(*bps),
            Self::Percent { percent } => FeeRate::from_percent(*percent),
        }
    }
}

/// Static reserve snapshot plus fee, as supplied by an external loader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PoolConfig {
    pub reserve_in: String,
    pub reserve_out: String,
    #[serde(default)]
    pub fee: FeeConfig,
}

impl PoolConfig {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("Failed to parse pool configuration")
    }

    /// Load a pool snapshot from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pool configuration {:?}", path))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid pool configuration in {:?}", path))?;
        info!("Loaded pool config from {:?}", path);
        Ok(config)
    }

    /// Validate the snapshot and build the immutable pool state
    pub fn to_pool_state(&self) -> Result<PoolState> {
        let reserve_in = parse_field("reserve_in", &self.reserve_in)?;
        let reserve_out = parse_field("reserve_out", &self.reserve_out)?;
        let fee = self.fee.to_fee_rate()?;
        Ok(PoolState::with_fee(reserve_in, reserve_out, fee))
    }
}

/// Parse a non-negative decimal integer of at most 256 bits.
///
/// Surrounding whitespace and `_` digit separators are accepted. Negative
/// quantities are rejected rather than clamped.
pub fn parse_amount(raw: &str) -> Result<U256> {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return Err(QuoteError::invalid_config(format!(
            "negative quantity {:?}",
            trimmed
        )));
    }

    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() {
        return Err(QuoteError::invalid_config("empty quantity"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuoteError::invalid_config(format!(
            "{:?} is not a decimal integer",
            trimmed
        )));
    }

    U256::from_dec_str(&digits).map_err(|_| {
        QuoteError::invalid_config(format!("{:?} exceeds 256 bits", trimmed))
    })
}

fn parse_field(field: &str, raw: &str) -> Result<U256> {
    parse_amount(raw).map_err(|err| match err {
        QuoteError::InvalidPoolConfig { reason } => {
            QuoteError::invalid_config(format!("{}: {}", field, reason))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("0").unwrap(), U256::zero());
        assert_eq!(parse_amount(" 1_000_000 ").unwrap(), U256::from(1_000_000));
        assert_eq!(
            parse_amount(
                "115792089237316195423570985008687907853269984665640564039457584007913129639935"
            )
            .unwrap(),
            U256::MAX
        );
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        for raw in ["", "  ", "-5", "12a", "1.5", "+7", "0x10"] {
            assert!(
                matches!(parse_amount(raw), Err(QuoteError::InvalidPoolConfig { .. })),
                "{:?} should be rejected",
                raw
            );
        }
        // 2^256
        assert!(parse_amount(
            "115792089237316195423570985008687907853269984665640564039457584007913129639936"
        )
        .is_err());
    }

    #[test]
    fn test_fee_notations() {
        let ratio = FeeConfig::Ratio {
            numerator: "3".to_string(),
            denominator: "1000".to_string(),
        };
        let bps = FeeConfig::Bps { bps: 30 };
        let percent = FeeConfig::Percent { percent: dec!(0.3) };

        let expected = FeeRate::new(U256::from(3), U256::from(1000)).unwrap();
        assert_eq!(ratio.to_fee_rate().unwrap(), expected);
        assert_eq!(percent.to_fee_rate().unwrap(), expected);
        assert_eq!(bps.to_fee_rate().unwrap(), FeeRate::default());
    }

    #[test]
    fn test_from_toml_str() {
        let config = PoolConfig::from_toml_str(
            r#"
            reserve_in = "1000"
            reserve_out = "2000"

            [fee]
            numerator = "3"
            denominator = "1000"
            "#,
        )
        .unwrap();

        let state = config.to_pool_state().unwrap();
        assert_eq!(state.reserve_in(), U256::from(1000));
        assert_eq!(state.quote_forward(U256::from(100)).unwrap(), U256::from(181));
    }

    #[test]
    fn test_fee_defaults_to_thirty_bps() {
        let config = PoolConfig::from_toml_str(
            r#"
            reserve_in = "1"
            reserve_out = "1"
            "#,
        )
        .unwrap();
        assert_eq!(config.fee, FeeConfig::default());
    }

    #[test]
    fn test_percent_fee_from_toml() {
        let config = PoolConfig::from_toml_str(
            r#"
            reserve_in = "10"
            reserve_out = "10"
            fee = { percent = "0.05" }
            "#,
        )
        .unwrap();
        assert_eq!(config.fee.to_fee_rate().unwrap().to_string(), "5/10000");
    }

    #[test]
    fn test_invalid_values_name_the_field() {
        let config = PoolConfig {
            reserve_in: "-100".to_string(),
            reserve_out: "100".to_string(),
            fee: FeeConfig::default(),
        };
        match config.to_pool_state() {
            Err(QuoteError::InvalidPoolConfig { reason }) => {
                assert!(reason.starts_with("reserve_in:"), "{}", reason)
            }
            other => panic!("unexpected {:?}", other),
        }

        let config = PoolConfig {
            reserve_in: "100".to_string(),
            reserve_out: "100".to_string(),
            fee: FeeConfig::Ratio {
                numerator: "5".to_string(),
                denominator: "0".to_string(),
            },
        };
        assert!(matches!(
            config.to_pool_state(),
            Err(QuoteError::InvalidPoolConfig { .. })
        ));
    }

    #[test]
    fn test_malformed_toml_is_reported() {
        let err = PoolConfig::from_toml_str("reserve_in = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse pool configuration"));
    }
}
