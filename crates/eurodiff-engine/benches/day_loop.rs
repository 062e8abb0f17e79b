//! Criterion micro-benchmarks for case initialization and the day loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eurodiff_engine::{process, Case};
use eurodiff_test_utils::{canonical_cases, strips};

/// Benchmark: build and validate a 10x10 grid split into 10 strips.
fn bench_init_strips_10(c: &mut Criterion) {
    let cfg = strips(10);
    c.bench_function("init_strips_10", |b| {
        b.iter(|| black_box(Case::new(&cfg)));
    });
}

/// Benchmark: 100 days on a full 10x10 grid with 5 currencies.
fn bench_step_100_days(c: &mut Criterion) {
    let cfg = strips(5);
    c.bench_function("step_100_days_strips_5", |b| {
        b.iter_batched(
            || Case::new(&cfg).unwrap(),
            |mut case| {
                for _ in 0..100 {
                    case.step_day();
                }
                black_box(case.day())
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: the full canonical sample, end to end.
fn bench_canonical_sample(c: &mut Criterion) {
    let cases = canonical_cases();
    c.bench_function("canonical_sample", |b| {
        b.iter(|| {
            for cfg in &cases {
                black_box(process(cfg));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_init_strips_10,
    bench_step_100_days,
    bench_canonical_sample
);
criterion_main!(benches);
