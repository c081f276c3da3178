//! Proportional trading fee as an exact rational
//!
//! The pool keeps `numerator / denominator` of every input amount. Keeping
//! the fee as a ratio of integers (rather than a float or a scaled decimal)
//! lets the engine apply it without any rounding of its own.

use crate::error::{QuoteError, Result};
use ethereum_types::U256;
use rust_decimal::Decimal;
use std::fmt;

/// Basis-point denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Validated fee ratio with `0 <= numerator < denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeeRate {
    numerator: U256,
    denominator: U256,
}

impl FeeRate {
    /// Classic 0.3% constant-product pool fee
    pub const DEFAULT_BPS: u32 = 30;

    pub fn new(numerator: U256, denominator: U256) -> Result<Self> {
        if denominator.is_zero() {
            return Err(QuoteError::invalid_config("fee denominator must be positive"));
        }
        if numerator >= denominator {
            return Err(QuoteError::invalid_config(format!(
                "fee numerator {} must be below denominator {}",
                numerator, denominator
            )));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Fee in basis points (30 = 0.3%)
    pub fn from_bps(bps: u32) -> Result<Self> {
        Self::new(U256::from(bps), U256::from(BPS_DENOMINATOR))
    }

    /// Exact conversion of a percentage such as `0.3` or `0.05`
    pub fn from_percent(percent: Decimal) -> Result<Self> {
        if percent.is_sign_negative() && !percent.is_zero() {
            return Err(QuoteError::invalid_config(format!(
                "fee percent {} is negative",
                percent
            )));
        }
        let mantissa = percent.mantissa().unsigned_abs();
        let denominator = U256::exp10(percent.scale() as usize + 2);
        Self::new(U256::from(mantissa), denominator)
    }

    /// Fee-free pool
    pub fn zero() -> Self {
        Self {
            numerator: U256::zero(),
            denominator: U256::one(),
        }
    }

    pub fn numerator(&self) -> U256 {
        self.numerator
    }

    pub fn denominator(&self) -> U256 {
        self.denominator
    }

    /// Share of the input that reaches the curve, scaled by `denominator`.
    /// Never zero because `numerator < denominator`.
    pub fn multiplier(&self) -> U256 {
        self.denominator - self.numerator
    }
}

impl Default for FeeRate {
    fn default() -> Self {
        Self {
            numerator: U256::from(Self::DEFAULT_BPS),
            denominator: U256::from(BPS_DENOMINATOR),
        }
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
