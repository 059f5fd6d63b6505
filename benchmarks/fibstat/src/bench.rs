//! fibstat benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Naive Fibonacci at every ordinal below `FIBSTAT_MAX_ORDINAL` (default 30)
//! - The classic `fib(30)` single-call timing
//! - Standard deviation scalability (1K to 1M samples)
//!
//! Run with `cargo bench -p fibstat-bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fibstat::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

const DEFAULT_MAX_ORDINAL: i64 = 30;

fn max_ordinal() -> i64 {
    env::var("FIBSTAT_MAX_ORDINAL")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_ORDINAL)
}

/// Generate normally distributed samples with a reproducible RNG.
fn generate_samples(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(10.0, 2.5).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

// ============================================================================
// Fibonacci
// ============================================================================

fn bench_fib_ordinals(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_by_ordinal");

    for n in 0..max_ordinal() {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fib(black_box(n)))
        });
    }

    group.finish();
}

fn bench_fib_30(c: &mut Criterion) {
    let mut group = c.benchmark_group("fib_30");
    group.sample_size(10);

    group.bench_function("i64", |b| b.iter(|| fib(black_box(30_i64))));
    group.bench_function("u32", |b| b.iter(|| fib(black_box(30_u32))));

    group.finish();
}

// ============================================================================
// Standard Deviation
// ============================================================================

fn bench_std_dev_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("std_dev_scalability");

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let samples = generate_samples(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("population", size), &samples, |b, s| {
            b.iter(|| std_dev(black_box(s.as_slice())))
        });

        let sample_method = StdDev::<f64>::new().method(Sample).build().unwrap();
        group.bench_with_input(BenchmarkId::new("sample", size), &samples, |b, s| {
            b.iter(|| sample_method.compute(black_box(s.as_slice())))
        });
    }

    group.finish();
}

fn bench_std_dev_unchecked(c: &mut Criterion) {
    let samples = generate_samples(100_000, 7);
    let unchecked = StdDev::<f64>::new().check_finite(false).build().unwrap();

    c.bench_function("std_dev_unchecked_100k", |b| {
        b.iter(|| unchecked.compute(black_box(samples.as_slice())))
    });
}

criterion_group!(
    benches,
    bench_fib_ordinals,
    bench_fib_30,
    bench_std_dev_scalability,
    bench_std_dev_unchecked
);
criterion_main!(benches);
