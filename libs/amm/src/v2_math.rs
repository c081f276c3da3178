//! Constant-product (x*y=k) quote math with exact integer arithmetic
//!
//! Reserves and amounts are 256-bit unsigned integers. Every product of two
//! of them is formed as a 512-bit value, so a quote either fits exactly or
//! fails with [`QuoteError::ArithmeticOverflow`]; nothing ever wraps.
//!
//! Rounding always favours the pool: forward quotes round the output down,
//! reverse quotes round the required input up.

use crate::error::{QuoteError, Result};
use crate::fee::BPS_DENOMINATOR;
use crate::pool_state::PoolState;
use ethereum_types::{U256, U512};
use tracing::{debug, trace};

/// Constant-product quote engine. All functions are pure.
pub struct V2Math;

impl V2Math {
    /// Output amount for an exact input, fee taken from the input side.
    ///
    /// ```text
    /// amount_in_net = amount_in * (fee_den - fee_num)
    /// amount_out    = floor(amount_in_net * reserve_out
    ///                       / (reserve_in * fee_den + amount_in_net))
    /// ```
    ///
    /// The result is always strictly below `reserve_out`.
    pub fn quote_forward(state: &PoolState, amount_in: U256) -> Result<U256> {
        Self::forward(state, amount_in).inspect_err(|err| {
            debug!(kind = err.kind(), %amount_in, %err, "forward quote rejected");
        })
    }

    /// Input amount required to receive at least `amount_out`.
    ///
    /// ```text
    /// amount_in = floor(reserve_in * amount_out * fee_den
    ///                   / ((reserve_out - amount_out) * (fee_den - fee_num))) + 1
    /// ```
    ///
    /// Feeding the result back through [`V2Math::quote_forward`] yields an
    /// output no smaller than `amount_out`.
    pub fn quote_reverse(state: &PoolState, amount_out: U256) -> Result<U256> {
        Self::reverse(state, amount_out).inspect_err(|err| {
            debug!(kind = err.kind(), %amount_out, %err, "reverse quote rejected");
        })
    }

    /// Apply a completed trade and return the next state.
    ///
    /// The pair must be exactly what [`V2Math::quote_forward`] produces for
    /// `amount_in` on `state`; anything else, including a pair the forward
    /// formula cannot evaluate on this state, is an
    /// [`QuoteError::InvariantViolation`]. Only the new `reserve_in`
    /// exceeding 256 bits is reported as overflow.
    pub fn commit(state: &PoolState, amount_in: U256, amount_out: U256) -> Result<PoolState> {
        let expected_amount_out = match Self::forward(state, amount_in) {
            Ok(expected_amount_out) => expected_amount_out,
            Err(err) => {
                debug!(
                    kind = err.kind(),
                    %amount_in,
                    %amount_out,
                    "commit rejected: no forward quote"
                );
                return Err(QuoteError::InvariantViolation {
                    amount_in,
                    amount_out,
                    expected_amount_out: U256::zero(),
                });
            }
        };

        if amount_out != expected_amount_out {
            debug!(
                %amount_in,
                %amount_out,
                %expected_amount_out,
                "commit rejected: output differs from forward quote"
            );
            return Err(QuoteError::InvariantViolation {
                amount_in,
                amount_out,
                expected_amount_out,
            });
        }

        let reserve_in = state
            .reserve_in()
            .checked_add(amount_in)
            .ok_or_else(|| QuoteError::overflow("commit reserve_in"))?;
        // forward quotes stay below reserve_out
        let reserve_out = state.reserve_out() - amount_out;

        trace!(%reserve_in, %reserve_out, "committed swap");
        Ok(PoolState::with_fee(reserve_in, reserve_out, state.fee()))
    }

    /// Shortfall of the realized output against the ideal spot-rate output
    /// (`amount_in * reserve_out / reserve_in`), fee included, in basis
    /// points rounded down.
    pub fn slippage_bps(state: &PoolState, amount_in: U256) -> Result<u32> {
        let amount_out = Self::quote_forward(state, amount_in)?;
        if amount_in.is_zero() {
            return Ok(0);
        }

        let ideal = amount_in.full_mul(state.reserve_out());
        let realized = amount_out.full_mul(state.reserve_in());
        Self::ratio_bps(ideal.saturating_sub(realized), ideal, "slippage")
    }

    /// Relative drop of the spot price `reserve_out / reserve_in` once the
    /// forward quote for `amount_in` is committed, in basis points rounded
    /// down.
    pub fn price_impact_bps(state: &PoolState, amount_in: U256) -> Result<u32> {
        let amount_out = Self::quote_forward(state, amount_in)?;
        if amount_in.is_zero() {
            return Ok(0);
        }
        let next = Self::commit(state, amount_in, amount_out)?;

        // spot_after / spot_before = (ro' * ri) / (ri' * ro)
        let before = next.reserve_in().full_mul(state.reserve_out());
        let after = next.reserve_out().full_mul(state.reserve_in());
        Self::ratio_bps(before.saturating_sub(after), before, "price impact")
    }

    fn forward(state: &PoolState, amount_in: U256) -> Result<U256> {
        state.ensure_liquid()?;
        if amount_in.is_zero() {
            return Ok(U256::zero());
        }

        let fee = state.fee();
        let amount_in_net = amount_in.full_mul(fee.multiplier());
        let numerator = amount_in_net
            .checked_mul(U512::from(state.reserve_out()))
            .ok_or_else(|| QuoteError::overflow("forward numerator"))?;
        let denominator = state
            .reserve_in()
            .full_mul(fee.denominator())
            .checked_add(amount_in_net)
            .ok_or_else(|| QuoteError::overflow("forward denominator"))?;

        let amount_out = U256::try_from(numerator / denominator)
            .map_err(|_| QuoteError::overflow("forward result"))?;

        trace!(%amount_in, %amount_out, fee = %fee, "forward quote");
        Ok(amount_out)
    }

    fn reverse(state: &PoolState, amount_out: U256) -> Result<U256> {
        state.ensure_liquid()?;
        if amount_out.is_zero() {
            return Ok(U256::zero());
        }
        if amount_out >= state.reserve_out() {
            return Err(QuoteError::InsufficientLiquidity {
                requested: amount_out,
                available: state.reserve_out(),
            });
        }

        let fee = state.fee();
        let numerator = state
            .reserve_in()
            .full_mul(amount_out)
            .checked_mul(U512::from(fee.denominator()))
            .ok_or_else(|| QuoteError::overflow("reverse numerator"))?;
        let denominator = (state.reserve_out() - amount_out).full_mul(fee.multiplier());

        // Add 1 to round up (ensures sufficient input)
        let amount_in = (numerator / denominator)
            .checked_add(U512::one())
            .ok_or_else(|| QuoteError::overflow("reverse rounding"))?;
        let amount_in =
            U256::try_from(amount_in).map_err(|_| QuoteError::overflow("reverse result"))?;

        trace!(%amount_out, %amount_in, fee = %fee, "reverse quote");
        Ok(amount_in)
    }

    fn ratio_bps(part: U512, whole: U512, operation: &'static str) -> Result<u32> {
        if whole.is_zero() {
            return Ok(0);
        }
        let scaled = part
            .checked_mul(U512::from(BPS_DENOMINATOR))
            .ok_or_else(|| QuoteError::overflow(operation))?;
        // part <= whole, so the ratio is at most BPS_DENOMINATOR
        Ok((scaled / whole).low_u32())
    }
}
