//! Immutable reserve snapshot for one trade direction

use crate::error::{QuoteError, Result};
use crate::fee::FeeRate;
use crate::v2_math::V2Math;
use ethereum_types::{U256, U512};

/// Pool reserves and fee structure for a constant-product pool.
///
/// `reserve_in` is the balance of the token a trader offers, `reserve_out`
/// the balance of the token they receive. Quotes never modify a state;
/// [`PoolState::commit`] returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolState {
    reserve_in: U256,
    reserve_out: U256,
    fee: FeeRate,
}

impl PoolState {
    /// Build a state from raw reserves and fee parameters.
    ///
    /// Zero reserves are accepted here; quoting against them fails with
    /// [`QuoteError::IlliquidPool`].
    pub fn new(
        reserve_in: U256,
        reserve_out: U256,
        fee_numerator: U256,
        fee_denominator: U256,
    ) -> Result<Self> {
        let fee = FeeRate::new(fee_numerator, fee_denominator)?;
        Ok(Self::with_fee(reserve_in, reserve_out, fee))
    }

    pub fn with_fee(reserve_in: U256, reserve_out: U256, fee: FeeRate) -> Self {
        Self {
            reserve_in,
            reserve_out,
            fee,
        }
    }

    pub fn reserve_in(&self) -> U256 {
        self.reserve_in
    }

    pub fn reserve_out(&self) -> U256 {
        self.reserve_out
    }

    pub fn fee(&self) -> FeeRate {
        self.fee
    }

    pub fn is_liquid(&self) -> bool {
        !self.reserve_in.is_zero() && !self.reserve_out.is_zero()
    }

    pub fn ensure_liquid(&self) -> Result<()> {
        if self.is_liquid() {
            Ok(())
        } else {
            Err(QuoteError::IlliquidPool {
                reserve_in: self.reserve_in,
                reserve_out: self.reserve_out,
            })
        }
    }

    /// Same pool seen from the other side of the trade
    pub fn reversed(&self) -> Self {
        Self {
            reserve_in: self.reserve_out,
            reserve_out: self.reserve_in,
            fee: self.fee,
        }
    }

    /// Constant product `k = reserve_in * reserve_out`
    pub fn invariant(&self) -> U512 {
        self.reserve_in.full_mul(self.reserve_out)
    }

    pub fn quote_forward(&self, amount_in: U256) -> Result<U256> {
        V2Math::quote_forward(self, amount_in)
    }

    pub fn quote_reverse(&self, amount_out: U256) -> Result<U256> {
        V2Math::quote_reverse(self, amount_out)
    }

    pub fn commit(&self, amount_in: U256, amount_out: U256) -> Result<Self> {
        V2Math::commit(self, amount_in, amount_out)
    }
}
