//! Union-find queries over unweighted undirected graphs.
//!
//! Each helper validates every road against the node count before touching a
//! [`DisjointSet`], so errors never come with partial answers.

use tracing::{debug, instrument};

use crate::{DisjointSet, edge::check_node, error::Result};

/// A road (undirected, unweighted edge) between two node ids.
pub type Road = (usize, usize);

fn validate_roads(node_count: usize, roads: &[Road]) -> Result<()> {
    for &(left, right) in roads {
        check_node(left, node_count)?;
        check_node(right, node_count)?;
    }
    Ok(())
}

fn join_all(node_count: usize, roads: &[Road]) -> DisjointSet {
    let mut sets = DisjointSet::new(node_count);
    for &(left, right) in roads {
        sets.union_unchecked(left, right);
    }
    sets
}

/// Returns the fewest new roads that connect every component.
///
/// Component representatives are taken in ascending order and chained, so the
/// answer for `k` components is always `k - 1` roads of the form
/// `(r0, r1), (r1, r2), ...`.
///
/// # Errors
/// Returns [`crate::ForestError::NodeOutOfRange`] when a road references a node
/// id `>= node_count`.
///
/// # Examples
/// ```
/// use spanwise_core::connecting_roads;
///
/// let roads = connecting_roads(4, &[(0, 1), (2, 3)])?;
/// assert_eq!(roads, vec![(0, 2)]);
/// # Ok::<(), spanwise_core::ForestError>(())
/// ```
#[instrument(
    name = "core.connectivity.connecting_roads",
    err,
    skip(roads),
    fields(road_count = roads.len()),
)]
pub fn connecting_roads(node_count: usize, roads: &[Road]) -> Result<Vec<Road>> {
    validate_roads(node_count, roads)?;
    let sets = join_all(node_count, roads);
    let representatives = sets.representatives();
    let new_roads: Vec<Road> = representatives
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();
    debug!(
        components = representatives.len(),
        new_roads = new_roads.len(),
        "connecting roads computed"
    );
    Ok(new_roads)
}

/// Returns `true` when the undirected graph contains a cycle.
///
/// A self loop, or a second road between the same pair of nodes, is a cycle.
///
/// # Errors
/// Returns [`crate::ForestError::NodeOutOfRange`] when a road references a node
/// id `>= node_count`.
///
/// # Examples
/// ```
/// use spanwise_core::has_cycle;
///
/// assert!(has_cycle(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (1, 4)])?);
/// assert!(!has_cycle(3, &[(0, 1), (1, 2)])?);
/// # Ok::<(), spanwise_core::ForestError>(())
/// ```
#[instrument(
    name = "core.connectivity.has_cycle",
    err,
    skip(roads),
    fields(road_count = roads.len()),
)]
pub fn has_cycle(node_count: usize, roads: &[Road]) -> Result<bool> {
    validate_roads(node_count, roads)?;
    let mut sets = DisjointSet::new(node_count);
    let found = roads
        .iter()
        .any(|&(left, right)| !sets.union_unchecked(left, right));
    debug!(found, "cycle check completed");
    Ok(found)
}

/// Returns the number of connected components.
///
/// # Errors
/// Returns [`crate::ForestError::NodeOutOfRange`] when a road references a node
/// id `>= node_count`.
#[instrument(
    name = "core.connectivity.component_count",
    err,
    skip(roads),
    fields(road_count = roads.len()),
)]
pub fn component_count(node_count: usize, roads: &[Road]) -> Result<usize> {
    validate_roads(node_count, roads)?;
    Ok(join_all(node_count, roads).component_count())
}
