//! Benchmark workloads for FlatHeap.
//!
//! - [`HeapWorkload`]: entry count, batch size and seed for the raw
//!   push/pop benches
//! - [`GridGraph`]: seeded 4-neighbour grid in CSR form
//! - [`shortest_paths`]: lazy-deletion Dijkstra driven by a reusable heap

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use flatheap::FlatHeap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Sizing for the push / pop / push-pop benchmarks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeapWorkload {
    /// Total entries pushed per iteration.
    pub entries: usize,
    /// Entries pushed then popped per round in the interleaved bench.
    ///
    /// Must be non-zero.
    pub batch: usize,
    /// Seed for the priority stream.
    pub seed: u64,
}

impl HeapWorkload {
    /// Default entry count.
    pub const DEFAULT_ENTRIES: usize = 100_000;

    /// Default interleave batch: one thousandth of the entries.
    pub const DEFAULT_BATCH: usize = Self::DEFAULT_ENTRIES / 1_000;

    /// Default seed.
    pub const DEFAULT_SEED: u64 = 42;

    /// Workload with `entries` entries and default batch and seed.
    pub fn new(entries: usize) -> Self {
        Self {
            entries,
            batch: Self::DEFAULT_BATCH,
            seed: Self::DEFAULT_SEED,
        }
    }

    /// Priorities for this workload, in push order.
    pub fn priorities(&self) -> Vec<f64> {
        flatheap_test_utils::seeded_priorities(self.entries, self.seed)
    }
}

impl Default for HeapWorkload {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ENTRIES)
    }
}

/// Weighted directed graph over a `width × height` grid, 4-neighbourhood.
///
/// Adjacency is stored CSR-style: the edges of node `n` are
/// `targets[offsets[n]..offsets[n + 1]]` with matching `weights`.
#[derive(Clone, Debug)]
pub struct GridGraph {
    width: u32,
    height: u32,
    offsets: Vec<usize>,
    targets: Vec<u32>,
    weights: Vec<f64>,
}

impl GridGraph {
    /// Minimum edge weight (inclusive).
    pub const MIN_WEIGHT: f64 = 1.0;

    /// Maximum edge weight (exclusive).
    pub const MAX_WEIGHT: f64 = 10.0;

    /// Build a grid with edge weights drawn from `seed`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` does not fit in `u32`.
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let node_count = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("grid {width}x{height} exceeds u32 node ids"));
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut offsets = Vec::with_capacity(node_count as usize + 1);
        let mut targets = Vec::with_capacity(node_count as usize * 4);
        let mut weights = Vec::with_capacity(node_count as usize * 4);

        offsets.push(0);
        for y in 0..height {
            for x in 0..width {
                let neighbours = [
                    (x > 0).then(|| (x - 1, y)),
                    (x + 1 < width).then(|| (x + 1, y)),
                    (y > 0).then(|| (x, y - 1)),
                    (y + 1 < height).then(|| (x, y + 1)),
                ];
                for (nx, ny) in neighbours.into_iter().flatten() {
                    targets.push(ny * width + nx);
                    weights.push(rng.random_range(Self::MIN_WEIGHT..Self::MAX_WEIGHT));
                }
                offsets.push(targets.len());
            }
        }

        Self {
            width,
            height,
            offsets,
            targets,
            weights,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Grid dimensions `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Outgoing `(target, weight)` pairs of `node`.
    pub fn edges(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let range = self.offsets[node as usize]..self.offsets[node as usize + 1];
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }
}

/// Single-source shortest path distances from `source`.
///
/// Without decrease-key, a node is pushed again whenever its distance
/// improves and stale entries are skipped when popped. `heap` is cleared
/// first and left empty, so its capacity carries over between calls.
/// Unreachable nodes report `f64::INFINITY`.
///
/// # Panics
///
/// Panics if `source` is not a node of `graph`.
pub fn shortest_paths(graph: &GridGraph, source: u32, heap: &mut FlatHeap<u32, f64>) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; graph.node_count()];
    heap.clear();

    dist[source as usize] = 0.0;
    heap.push(source, 0.0);

    while let Some((node, d)) = heap.try_pop_with_priority() {
        if d > dist[node as usize] {
            continue;
        }
        for (next, weight) in graph.edges(node) {
            let candidate = d + weight;
            if candidate < dist[next as usize] {
                dist[next as usize] = candidate;
                heap.push(next, candidate);
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bellman-Ford relaxation to cross-check Dijkstra.
    fn relax_until_stable(graph: &GridGraph, source: u32) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; graph.node_count()];
        dist[source as usize] = 0.0;
        loop {
            let mut changed = false;
            for node in 0..graph.node_count() as u32 {
                let d = dist[node as usize];
                if d.is_infinite() {
                    continue;
                }
                for (next, weight) in graph.edges(node) {
                    if d + weight < dist[next as usize] {
                        dist[next as usize] = d + weight;
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn grid_edge_counts() {
        let graph = GridGraph::new(3, 2, 1);
        assert_eq!(graph.node_count(), 6);
        // Horizontal: 2 per row * 2 rows, vertical: 3, both directions.
        assert_eq!(graph.edge_count(), 2 * (2 * 2 + 3));
        assert_eq!(graph.dimensions(), (3, 2));
    }

    #[test]
    fn weights_in_range() {
        let graph = GridGraph::new(8, 8, 5);
        for node in 0..graph.node_count() as u32 {
            for (_, w) in graph.edges(node) {
                assert!((GridGraph::MIN_WEIGHT..GridGraph::MAX_WEIGHT).contains(&w));
            }
        }
    }

    #[test]
    fn dijkstra_matches_relaxation() {
        let graph = GridGraph::new(12, 9, 77);
        let mut heap = FlatHeap::new();
        for source in [0, 17, 107] {
            let fast = shortest_paths(&graph, source, &mut heap);
            let slow = relax_until_stable(&graph, source);
            for (a, b) in fast.iter().zip(&slow) {
                assert!((a - b).abs() < 1e-9, "source {source}: {a} vs {b}");
            }
            assert!(heap.is_empty());
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn source_outside_grid_panics() {
        let graph = GridGraph::new(2, 2, 0);
        let mut heap = FlatHeap::new();
        shortest_paths(&graph, 4, &mut heap);
    }

    #[test]
    fn single_node_grid() {
        let graph = GridGraph::new(1, 1, 0);
        let mut heap = FlatHeap::new();
        assert_eq!(shortest_paths(&graph, 0, &mut heap), vec![0.0]);
    }

    #[test]
    fn default_workload_batches_evenly() {
        let workload = HeapWorkload::default();
        assert_eq!(workload.entries % workload.batch, 0);
        assert_eq!(workload.priorities().len(), workload.entries);
    }
}
