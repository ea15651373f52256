//! Criterion micro-benchmarks for push, pop and interleaved push/pop.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use flatheap::FlatHeap;
use flatheap_bench::HeapWorkload;
use std::hint::black_box;

fn filled_heap(priorities: &[f64]) -> FlatHeap<usize, f64> {
    let mut heap = FlatHeap::with_capacity(priorities.len());
    for (id, &p) in priorities.iter().enumerate() {
        heap.push(id, p);
    }
    heap
}

/// Benchmark: push 100K random priorities into an empty heap.
fn bench_push(c: &mut Criterion) {
    let priorities = HeapWorkload::default().priorities();
    c.bench_function("push_100k", |b| {
        b.iter(|| {
            let mut heap = FlatHeap::new();
            for (id, &p) in priorities.iter().enumerate() {
                heap.push(id, p);
            }
            black_box(heap.len());
        });
    });
}

/// Benchmark: push 100K into a cleared heap, so no allocation happens.
fn bench_push_reused(c: &mut Criterion) {
    let priorities = HeapWorkload::default().priorities();
    let mut heap = FlatHeap::with_capacity(priorities.len());
    c.bench_function("push_100k_reused", |b| {
        b.iter(|| {
            heap.clear();
            for (id, &p) in priorities.iter().enumerate() {
                heap.push(id, p);
            }
            black_box(heap.len());
        });
    });
}

/// Benchmark: pop a 100K heap until empty.
fn bench_pop(c: &mut Criterion) {
    let priorities = HeapWorkload::default().priorities();
    c.bench_function("pop_100k", |b| {
        b.iter_batched_ref(
            || filled_heap(&priorities),
            |heap| {
                while !heap.is_empty() {
                    black_box(heap.pop());
                }
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: push a batch then pop it, repeated over 100K entries.
fn bench_push_pop(c: &mut Criterion) {
    let workload = HeapWorkload::default();
    let priorities = workload.priorities();
    c.bench_function("push_pop_100k", |b| {
        b.iter(|| {
            let mut heap = FlatHeap::new();
            for (round, chunk) in priorities.chunks(workload.batch).enumerate() {
                let base = round * workload.batch;
                for (k, &p) in chunk.iter().enumerate() {
                    heap.push(base + k, p);
                }
                for _ in chunk {
                    black_box(heap.pop());
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_push_reused,
    bench_pop,
    bench_push_pop
);
criterion_main!(benches);
