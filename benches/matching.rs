//! Benchmarks for the matching core.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- fill_sweep
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use interchange_dex::{BuyBook, Order, SellBook};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic book generation
// ============================================================================

/// Ask book with `count` orders of `quantity` at `base_price`, `base_price + 1`, ...
fn populate_asks(count: usize, base_price: u64, quantity: u64) -> SellBook {
    let mut asks = SellBook::new("marscoin", "venuscoin");
    for i in 0..count {
        asks.append_order("maker", quantity, base_price + i as u64)
            .unwrap();
    }
    asks
}

/// Bid book with prices drawn from a seeded RNG
fn random_bids(count: usize, seed: u64) -> BuyBook {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bids = BuyBook::new("marscoin", "venuscoin");
    for _ in 0..count {
        bids.append_order("maker", rng.gen_range(1..=1_000), rng.gen_range(900..=1_100))
            .unwrap();
    }
    bids
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_order");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || random_bids(size, 1),
                |mut bids| black_box(bids.append_order("taker", 10, 1_000).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fill_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_sweep");

    for levels in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(levels as u64));
        group.bench_with_input(BenchmarkId::from_parameter(levels), &levels, |b, &levels| {
            b.iter_batched(
                || populate_asks(1_000, 100, 10),
                |mut asks| {
                    let buy = Order::new(0, "taker", levels as u64 * 10, 10_000);
                    black_box(asks.fill_buy_order(buy))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fill_no_cross(c: &mut Criterion) {
    let asks = populate_asks(1_000, 100, 10);

    c.bench_function("fill_no_cross", |b| {
        b.iter_batched(
            || asks.clone(),
            |mut asks| black_box(asks.fill_buy_order(Order::new(0, "taker", 10, 50))),
            BatchSize::SmallInput,
        );
    });
}

fn bench_remove(c: &mut Criterion) {
    let bids = random_bids(10_000, 2);
    let mid = bids.book().orders()[bids.book().len() / 2].id;

    c.bench_function("remove_order_from_id", |b| {
        b.iter_batched(
            || bids.clone(),
            |mut bids| black_box(bids.remove_order_from_id(mid).unwrap()),
            BatchSize::SmallInput,
        );
    });
}

fn bench_state_root(c: &mut Criterion) {
    let bids = random_bids(1_000, 3);

    c.bench_function("state_root_1000", |b| {
        b.iter(|| black_box(bids.state_root().unwrap()));
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_fill_sweep,
    bench_fill_no_cross,
    bench_remove,
    bench_state_root
);
criterion_main!(benches);
