//! Quote engine errors
//!
//! Every fallible operation in the engine returns [`QuoteError`]. Each
//! variant carries the values that caused the rejection so callers can log
//! or fall back to another pool without recomputing anything.

use ethereum_types::U256;
use thiserror::Error;

/// Result alias used throughout the quote engine
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Rejections produced while constructing pools, quoting, or committing trades
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Reserve or fee parameters are malformed
    #[error("Invalid pool config: {reason}")]
    InvalidPoolConfig { reason: String },

    /// One or both reserves are zero, so no price exists
    #[error("Illiquid pool: reserve_in={reserve_in}, reserve_out={reserve_out}")]
    IlliquidPool { reserve_in: U256, reserve_out: U256 },

    /// Requested output meets or exceeds the output reserve
    #[error("Insufficient liquidity: requested {requested}, reserve holds {available}")]
    InsufficientLiquidity { requested: U256, available: U256 },

    /// An intermediate value does not fit the wide-integer representation
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow { operation: &'static str },

    /// A commit request could not have been produced by a forward quote
    #[error("Invariant violation: {amount_in} in pays {expected_amount_out}, not {amount_out}")]
    InvariantViolation {
        amount_in: U256,
        amount_out: U256,
        expected_amount_out: U256,
    },
}

impl QuoteError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidPoolConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::ArithmeticOverflow { operation }
    }

    /// Stable label for structured logs and metrics tags
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPoolConfig { .. } => "invalid_pool_config",
            Self::IlliquidPool { .. } => "illiquid_pool",
            Self::InsufficientLiquidity { .. } => "insufficient_liquidity",
            Self::ArithmeticOverflow { .. } => "arithmetic_overflow",
            Self::InvariantViolation { .. } => "invariant_violation",
        }
    }
}
