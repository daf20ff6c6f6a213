//! Prim's algorithm with a lazy binary heap.
//!
//! Each tree grows from the lowest unvisited node. Stale heap entries (whose
//! far endpoint was reached in the meantime) are skipped when popped rather
//! than removed eagerly.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

use crate::{Edge, Weight, error::Result};

use super::MinimumSpanningForest;

/// Heap entry for an edge leaving the current tree.
///
/// Ordered by weight and then by the edge's input position so that ties are
/// resolved the same way on every run.
struct Frontier<W> {
    weight: W,
    index: usize,
    to: usize,
}

impl<W: Weight> PartialEq for Frontier<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Frontier<W> {}

impl<W: Weight> Ord for Frontier<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.index.cmp(&other.index))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl<W: Weight> PartialOrd for Frontier<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Prim's algorithm over edges that already passed validation.
pub(super) fn prim_validated<W: Weight>(
    edges: &[Edge<W>],
    node_count: usize,
) -> Result<MinimumSpanningForest<W>> {
    let adjacency = build_adjacency(edges, node_count);
    let mut visited = vec![false; node_count];
    let mut heap = BinaryHeap::new();
    let mut selected = Vec::with_capacity(node_count.saturating_sub(1));
    let mut component_count = 0;

    for start in 0..node_count {
        if visited[start] {
            continue;
        }
        component_count += 1;
        visited[start] = true;
        push_frontier(&mut heap, &adjacency[start], &visited, edges);

        while let Some(Reverse(entry)) = heap.pop() {
            if visited[entry.to] {
                continue;
            }
            visited[entry.to] = true;
            let edge = edges[entry.index];
            selected.push(edge);
            push_frontier(&mut heap, &adjacency[entry.to], &visited, edges);
        }
    }

    MinimumSpanningForest::from_selected(selected, node_count, component_count)
}

/// Lists `(neighbour, edge index)` pairs per node in input order.
fn build_adjacency<W: Weight>(edges: &[Edge<W>], node_count: usize) -> Vec<Vec<(usize, usize)>> {
    let mut adjacency = vec![Vec::new(); node_count];
    for (index, edge) in edges.iter().enumerate() {
        if edge.is_self_loop() {
            continue;
        }
        adjacency[edge.source()].push((edge.target(), index));
        adjacency[edge.target()].push((edge.source(), index));
    }
    adjacency
}

fn push_frontier<W: Weight>(
    heap: &mut BinaryHeap<Reverse<Frontier<W>>>,
    neighbours: &[(usize, usize)],
    visited: &[bool],
    edges: &[Edge<W>],
) {
    for &(to, index) in neighbours {
        if !visited[to] {
            heap.push(Reverse(Frontier {
                weight: edges[index].weight(),
                index,
                to,
            }));
        }
    }
}
