//! # Arena Benchmark
//!
//! Placement construction of mixed types and bulk teardown.
//!
//! Run with: `cargo bench --package hearth_core --bench arena_benchmark`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hearth_core::Arena;

const ARENA_BYTES: usize = 1024 * 1024;

/// Benchmark: allocate until full, then clear.
fn bench_fill_and_clear(c: &mut Criterion) {
    let mut arena = Arena::new(ARENA_BYTES);

    c.bench_function("arena_fill_clear_1MB", |b| {
        b.iter(|| {
            let mut i = 0u64;
            while arena.try_alloc(black_box(i)).is_ok() {
                i += 1;
            }
            arena.clear();
            i
        });
    });
}

/// Benchmark: mixed sizes and alignments, with destructors.
fn bench_mixed(c: &mut Criterion) {
    c.bench_function("arena_mixed_10k", |b| {
        b.iter(|| {
            let mut arena = Arena::new(ARENA_BYTES);
            for i in 0..10_000u32 {
                match i % 3 {
                    0 => {
                        arena.alloc(i as u8);
                    }
                    1 => {
                        arena.alloc([f64::from(i); 2]);
                    }
                    _ => {
                        arena.alloc(vec![i]);
                    }
                }
            }
            black_box(arena.used())
        });
    });
}

criterion_group!(benches, bench_fill_and_clear, bench_mixed);
criterion_main!(benches);
