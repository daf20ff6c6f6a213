//! Independent reference computations for MST property tests.
//!
//! Nothing here touches [`crate::DisjointSet`]: the oracle keeps its own
//! naive parent array so a bug in the production union-find cannot hide in
//! both sides of a comparison.

use crate::Edge;
use crate::test_utils::count_components_by_search;

/// Naive root lookup without ranks.
fn root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `Some(component_count)` when `edges` form a forest over
/// `node_count` nodes, or `None` when they contain a cycle.
pub(super) fn forest_component_count(node_count: usize, edges: &[Edge<u32>]) -> Option<usize> {
    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    for edge in edges {
        let left = root(&mut parent, edge.source());
        let right = root(&mut parent, edge.target());
        if left == right {
            return None;
        }
        parent[right] = left;
        components -= 1;
    }
    Some(components)
}

/// Returns the component count of the graph described by `edges`.
pub(super) fn graph_component_count(node_count: usize, edges: &[Edge<u32>]) -> usize {
    let pairs: Vec<(usize, usize)> = edges
        .iter()
        .map(|edge| (edge.source(), edge.target()))
        .collect();
    count_components_by_search(node_count, &pairs)
}

/// Finds the minimum spanning forest weight by trying every edge subset.
///
/// Only suitable for the handful of edges produced by
/// `small_graph_strategy`.
pub(super) fn brute_force_forest_weight(node_count: usize, edges: &[Edge<u32>]) -> u64 {
    let target_size = node_count - graph_component_count(node_count, edges);
    let mut best: Option<u64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != target_size {
            continue;
        }
        let subset: Vec<Edge<u32>> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if forest_component_count(node_count, &subset).is_none() {
            continue;
        }
        let weight: u64 = subset.iter().map(|edge| u64::from(edge.weight())).sum();
        best = Some(best.map_or(weight, |current| current.min(weight)));
    }
    best.unwrap_or(0)
}
