//! # Typed Pool Benchmark
//!
//! Allocate/free churn and handle resolution at full index-space load.
//!
//! Run with: `cargo bench --package hearth_core --bench pool_benchmark`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hearth_core::{Handle, TypedPool, MAX_POOL_SLOTS};

/// Benchmark: fill the pool from empty.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_fill");

    for count in [1_000, 10_000, MAX_POOL_SLOTS] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut pool: TypedPool<[f32; 4]> = TypedPool::with_capacity(count);
                for _ in 0..count {
                    black_box(pool.allocate([0.0; 4]));
                }
                pool.active_count()
            });
        });
    }

    group.finish();
}

/// Benchmark: free and immediately reallocate through the LIFO free list.
fn bench_churn(c: &mut Criterion) {
    let mut pool: TypedPool<u64> = TypedPool::with_capacity(10_000);
    let mut handles: Vec<Handle> = (0..10_000).map(|i| pool.allocate(i)).collect();

    c.bench_function("pool_churn_10k", |b| {
        b.iter(|| {
            for handle in &mut handles {
                pool.free(*handle);
                *handle = pool.allocate(black_box(7));
            }
        });
    });
}

/// Benchmark: resolve live and stale handles.
fn bench_get(c: &mut Criterion) {
    let mut pool: TypedPool<u64> = TypedPool::with_capacity(10_000);
    let live: Vec<Handle> = (0..10_000).map(|i| pool.allocate(i)).collect();
    let stale: Vec<Handle> = live.iter().step_by(2).copied().collect();
    for &handle in &stale {
        pool.free(handle);
    }

    c.bench_function("pool_get_mixed_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for &handle in &live {
                if let Some(value) = pool.get(handle) {
                    sum += *value;
                }
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_fill, bench_churn, bench_get);
criterion_main!(benches);
