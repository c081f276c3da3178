//! Trade requests, quote results, and chained swap simulation
//!
//! [`quote`] is read-only. [`execute`] quotes and commits, handing back the
//! next pool value; the caller decides whether to publish it. [`simulate`]
//! replays several trades against one pool, each seeing the reserves left
//! by the previous trade.

use crate::error::Result;
use crate::pool_traits::AmmPool;
use ethereum_types::U256;
use tracing::{debug, trace};

/// Direction-tagged trade amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeRequest {
    /// Exact amount of the input token offered
    ExactIn(U256),
    /// Exact amount of the output token desired
    ExactOut(U256),
}

impl TradeRequest {
    pub fn amount(&self) -> U256 {
        match self {
            Self::ExactIn(amount) | Self::ExactOut(amount) => *amount,
        }
    }
}

/// Amounts on both sides of a quoted or committed trade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub amount_in: U256,
    pub amount_out: U256,
}

/// A committed trade and the pool value it produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome<P> {
    pub quote: Quote,
    pub next: P,
}

/// Price a trade without advancing the pool.
///
/// For [`TradeRequest::ExactOut`] the returned `amount_out` is what the
/// required input actually buys, which may exceed the request.
pub fn quote<P: AmmPool>(pool: &P, request: TradeRequest) -> Result<Quote> {
    let amount_in = match request {
        TradeRequest::ExactIn(amount_in) => amount_in,
        TradeRequest::ExactOut(amount_out) => pool.quote_reverse(amount_out)?,
    };
    let amount_out = pool.quote_forward(amount_in)?;
    Ok(Quote {
        amount_in,
        amount_out,
    })
}

/// Quote a trade and commit it.
///
/// Exact-output trades pay the reverse quote and receive its full forward
/// output, which may exceed the request by rounding.
pub fn execute<P: AmmPool>(pool: &P, request: TradeRequest) -> Result<SwapOutcome<P>> {
    let quote = quote(pool, request)?;
    let next = pool.commit(quote.amount_in, quote.amount_out)?;

    let (reserve_in, reserve_out) = next.reserves();
    trace!(
        amount_in = %quote.amount_in,
        amount_out = %quote.amount_out,
        %reserve_in,
        %reserve_out,
        "executed swap"
    );
    Ok(SwapOutcome { quote, next })
}

/// Execute `requests` in order against the same pool.
///
/// Stops at the first failing trade; earlier outcomes are discarded with it.
pub fn simulate<P, I>(pool: &P, requests: I) -> Result<Vec<SwapOutcome<P>>>
where
    P: AmmPool + Clone,
    I: IntoIterator<Item = TradeRequest>,
{
    let mut current = pool.clone();
    let mut outcomes = Vec::new();
    for (step, request) in requests.into_iter().enumerate() {
        let outcome = execute(&current, request).inspect_err(|err| {
            debug!(step, kind = err.kind(), %err, "simulation halted");
        })?;
        current = outcome.next.clone();
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
