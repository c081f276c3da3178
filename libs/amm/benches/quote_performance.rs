//! Quote latency benchmarks

use cpmm_quote::swap::{self, TradeRequest};
use cpmm_quote::{PoolState, U256};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn reference_pool() -> PoolState {
    PoolState::new(
        U256::from(1_000_000_000_000u64),
        U256::from(500_000_000_000_000_000_000u128),
        U256::from(30),
        U256::from(10_000),
    )
    .expect("valid pool")
}

fn bench_quotes(c: &mut Criterion) {
    let pool = reference_pool();
    let amount_in = U256::from(1_000_000_000u64);
    let amount_out = U256::from(1_000_000_000_000_000_000u128);

    c.bench_function("quote_forward", |b| {
        b.iter(|| pool.quote_forward(black_box(amount_in)))
    });

    c.bench_function("quote_reverse", |b| {
        b.iter(|| pool.quote_reverse(black_box(amount_out)))
    });

    c.bench_function("simulate_10_swaps", |b| {
        let trades = [TradeRequest::ExactIn(amount_in); 10];
        b.iter(|| swap::simulate(&pool, black_box(trades)))
    });
}

criterion_group!(benches, bench_quotes);
criterion_main!(benches);
