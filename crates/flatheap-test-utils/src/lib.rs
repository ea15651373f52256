//! Test utilities and scripted scenarios for FlatHeap development.
//!
//! Provides seeded priority generators, a [`HeapOp`] script runner that
//! records what a heap reports after every step, and proptest strategies
//! for generating scripts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use flatheap::FlatHeap;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lower bound of generated priorities.
pub const PRIORITY_MIN: f64 = -100.0;

/// Upper bound of generated priorities.
pub const PRIORITY_MAX: f64 = 100.0;

/// `n` deterministic priorities, uniform in `[PRIORITY_MIN, PRIORITY_MAX]`.
pub fn seeded_priorities(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| rng.random_range(PRIORITY_MIN..=PRIORITY_MAX))
        .collect()
}

/// Ascending copy of `priorities` (NaN-free input assumed).
pub fn sorted_copy(priorities: &[f64]) -> Vec<f64> {
    let mut sorted = priorities.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Push `(index, priority)` for every priority, then pop until empty,
/// returning the popped indices in order.
pub fn push_all_pop_all(heap: &mut FlatHeap<usize, f64>, priorities: &[f64]) -> Vec<usize> {
    for (id, &priority) in priorities.iter().enumerate() {
        heap.push(id, priority);
    }
    let mut order = Vec::with_capacity(priorities.len());
    while !heap.is_empty() {
        order.push(heap.pop());
    }
    order
}

/// One step of a scripted heap scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapOp {
    Push { item: u32, priority: i32 },
    Pop,
    Clear,
}

/// What the heap reported after one [`HeapOp`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Payload removed by a `Pop`; `None` for other ops or an empty pop.
    pub popped: Option<u32>,
    /// Length after the op.
    pub len: usize,
    /// Root entry after the op.
    pub root: Option<(u32, i32)>,
}

/// Apply `ops` in order using the safe accessors, recording an
/// [`Observation`] per step.
pub fn run_script(heap: &mut FlatHeap<u32, i32>, ops: &[HeapOp]) -> Vec<Observation> {
    ops.iter()
        .map(|op| {
            let popped = match *op {
                HeapOp::Push { item, priority } => {
                    heap.push(item, priority);
                    None
                }
                HeapOp::Pop => heap.try_pop(),
                HeapOp::Clear => {
                    heap.clear();
                    None
                }
            };
            Observation {
                popped,
                len: heap.len(),
                root: heap.try_peek_with_priority().map(|(&i, &p)| (i, p)),
            }
        })
        .collect()
}

/// Strategy for a single op, weighted towards pushes so heaps grow.
///
/// Priorities come from a narrow range to produce plenty of ties.
pub fn heap_op() -> impl Strategy<Value = HeapOp> {
    prop_oneof![
        6 => (any::<u32>(), -20i32..20).prop_map(|(item, priority)| HeapOp::Push { item, priority }),
        3 => Just(HeapOp::Pop),
        1 => Just(HeapOp::Clear),
    ]
}

/// Strategy for scripts of up to `max_len` ops.
pub fn heap_script(max_len: usize) -> impl Strategy<Value = Vec<HeapOp>> {
    proptest::collection::vec(heap_op(), 0..max_len)
}
