//! # Constant-Product Pool Quote Engine
//!
//! ## Purpose
//!
//! Deterministic swap quoting for x*y=k liquidity pools from locally held,
//! static reserve snapshots. Given a pool state and a trade amount the engine
//! returns the exact integer output (or required input) a constant-product
//! pool with a proportional input fee would settle, without touching any
//! network or ledger.
//!
//! ## Integration Points
//!
//! - **Input Sources**: Reserve and fee figures from a cache, database, or a
//!   prior on-chain read, either typed ([`PoolState::new`]) or via
//!   [`config::PoolConfig`]
//! - **Output Destinations**: Pricing APIs, routing optimizers, simulation
//!   loops, test harnesses
//! - **Precision**: 256-bit token quantities, 512-bit intermediates
//! - **Validation**: Overflow is reported as
//!   [`QuoteError::ArithmeticOverflow`], never wrapped
//!
//! ## Architecture Role
//!
//! ```text
//! PoolConfig ──► PoolState ──► V2Math::quote_forward / quote_reverse ──► amount
//!                    ▲                      │
//!                    └──── V2Math::commit ◄─┘  (next immutable state)
//! ```
//!
//! Pool states are plain `Copy` values. Quoting never mutates them, so any
//! number of threads can quote the same snapshot concurrently; sequencing
//! commits and publishing the resulting state is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use cpmm_quote::{PoolState, U256};
//!
//! let pool = PoolState::new(
//!     U256::from(1000),
//!     U256::from(2000),
//!     U256::from(3),
//!     U256::from(1000),
//! )?;
//!
//! let out = pool.quote_forward(U256::from(100))?;
//! assert_eq!(out, U256::from(181));
//!
//! let needed = pool.quote_reverse(out)?;
//! assert!(pool.quote_forward(needed)? >= out);
//!
//! let next = pool.commit(U256::from(100), out)?;
//! assert_eq!(next.reserve_in(), U256::from(1100));
//! # Ok::<(), cpmm_quote::QuoteError>(())
//! ```

pub mod config;
pub mod error;
pub mod fee;
pub mod pool_state;
pub mod pool_traits;
pub mod swap;
pub mod v2_math;

pub use config::{parse_amount, FeeConfig, PoolConfig};
pub use error::{QuoteError, Result};
pub use fee::FeeRate;
pub use pool_state::PoolState;
pub use pool_traits::AmmPool;
pub use swap::{Quote, SwapOutcome, TradeRequest};
pub use v2_math::V2Math;

/// Wide integer types used for token quantities
pub use ethereum_types::{U256, U512};
