//! Benchmark for ArrayDeque vs standard VecDeque.
//!
//! Measures growth from an empty deque and steady-state rotation, where the
//! ring buffer wraps on every pass.

use corral::linear::ArrayDeque;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::VecDeque;
use std::hint::black_box;

// =============================================================================
// push_back Benchmark
// =============================================================================

fn benchmark_push_back(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push_back");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ArrayDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = ArrayDeque::new();
                for index in 0..size {
                    deque.add_back(black_box(index));
                }
                black_box(deque)
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut deque = VecDeque::with_capacity(10);
                for index in 0..size {
                    deque.push_back(black_box(index));
                }
                black_box(deque)
            });
        });
    }

    group.finish();
}

// =============================================================================
// rotate Benchmark
// =============================================================================

fn benchmark_rotate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("rotate");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ArrayDeque", size), &size, |bencher, &size| {
            let mut deque: ArrayDeque<i32> = (0..size).collect();
            bencher.iter(|| {
                for _ in 0..size {
                    if let Ok(front) = deque.remove_front() {
                        deque.add_back(black_box(front));
                    }
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |bencher, &size| {
            let mut deque: VecDeque<i32> = (0..size).collect();
            bencher.iter(|| {
                for _ in 0..size {
                    if let Some(front) = deque.pop_front() {
                        deque.push_back(black_box(front));
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_push_back, benchmark_rotate);
criterion_main!(benches);
