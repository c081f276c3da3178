//! Pool trait definitions for the unified quote interface

use crate::error::Result;
use crate::fee::FeeRate;
use crate::pool_state::PoolState;
use crate::v2_math::V2Math;
use ethereum_types::U256;

/// Unified pool interface for quoting and in-memory swap simulation
pub trait AmmPool: Sized {
    /// Calculate output amount for given input
    fn quote_forward(&self, amount_in: U256) -> Result<U256>;

    /// Calculate required input for desired output
    fn quote_reverse(&self, amount_out: U256) -> Result<U256>;

    /// Apply a completed trade, producing the next pool value
    fn commit(&self, amount_in: U256, amount_out: U256) -> Result<Self>;

    /// Current `(reserve_in, reserve_out)`
    fn reserves(&self) -> (U256, U256);

    fn fee(&self) -> FeeRate;
}

impl AmmPool for PoolState {
    fn quote_forward(&self, amount_in: U256) -> Result<U256> {
        V2Math::quote_forward(self, amount_in)
    }

    fn quote_reverse(&self, amount_out: U256) -> Result<U256> {
        V2Math::quote_reverse(self, amount_out)
    }

    fn commit(&self, amount_in: U256, amount_out: U256) -> Result<Self> {
        V2Math::commit(self, amount_in, amount_out)
    }

    fn reserves(&self) -> (U256, U256) {
        (self.reserve_in(), self.reserve_out())
    }

    fn fee(&self) -> FeeRate {
        PoolState::fee(self)
    }
}
