//! Shortest paths on a weighted grid with a reused FlatHeap.
//!
//! Demonstrates: build grid → run Dijkstra from several sources through
//! one heap → report distances and how often the heap had to grow.

use flatheap::FlatHeap;
use flatheap_bench::{shortest_paths, GridGraph};

fn main() {
    println!("=== FlatHeap Shortest Path Example ===\n");

    let graph = GridGraph::new(64, 64, 42);
    let (width, height) = graph.dimensions();
    println!(
        "Grid {width}x{height}: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let mut heap = FlatHeap::new();
    let corners = [0, width - 1, width * (height - 1), width * height - 1];

    for &source in &corners {
        let before = heap.capacity();
        let dist = shortest_paths(&graph, source, &mut heap);
        let farthest = dist.iter().cloned().fold(0.0f64, f64::max);
        let mean = dist.iter().sum::<f64>() / dist.len() as f64;
        println!(
            "  source {source:>5}: farthest={farthest:>8.3}, mean={mean:>8.3}, heap slots {before} -> {}",
            heap.capacity()
        );
    }

    println!("\nDone.");
}
