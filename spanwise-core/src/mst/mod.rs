//! Minimum spanning forest construction.
//!
//! [`MinimumSpanningForestBuilder`] runs Kruskal's algorithm by default: the
//! edges are stable-sorted by weight and accepted whenever their endpoints sit
//! in different sets of a fresh [`DisjointSet`]. Prim's algorithm is
//! available as an alternative strategy and produces a forest of the same
//! total weight. Totals are computed from the multiset of selected weights,
//! so both strategies report the same value or the same overflow error.

mod prim;

use std::fmt;

use tracing::{debug, instrument};

use crate::{
    DisjointSet, Edge, ForestError, Weight,
    edge::validate_edges,
    error::Result,
    weight::checked_total,
};

/// Strategy used by [`MinimumSpanningForestBuilder::build`].
///
/// # Examples
/// ```
/// use spanwise_core::MstAlgorithm;
///
/// assert_eq!(MstAlgorithm::default(), MstAlgorithm::Kruskal);
/// assert_eq!(MstAlgorithm::Prim.as_str(), "prim");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Sort every edge by weight and join components greedily.
    #[default]
    Kruskal,
    /// Grow each component from its lowest node with a binary heap.
    Prim,
}

impl MstAlgorithm {
    /// Returns the lowercase name used in logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    node_count: usize,
    component_count: usize,
}

impl<W: Weight> MinimumSpanningForest<W> {
    fn from_selected(
        edges: Vec<Edge<W>>,
        node_count: usize,
        component_count: usize,
    ) -> Result<Self> {
        let total_weight = checked_total(edges.iter().map(Edge::weight)).ok_or(
            ForestError::WeightOverflow {
                edge_count: edges.len(),
            },
        )?;
        Ok(Self {
            edges,
            total_weight,
            node_count,
            component_count,
        })
    }

    /// Returns the selected edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> W { self.total_weight }

    /// Returns the number of nodes the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning the selected edges and total weight.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        (self.edges, self.total_weight)
    }
}

/// Configures and runs minimum spanning forest construction.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, MinimumSpanningForestBuilder, MstAlgorithm};
///
/// let edges = [
///     Edge::new(0, 1, 2_u32),
///     Edge::new(0, 3, 6),
///     Edge::new(1, 3, 8),
///     Edge::new(1, 2, 3),
///     Edge::new(1, 4, 5),
///     Edge::new(2, 4, 7),
/// ];
/// let forest = MinimumSpanningForestBuilder::new()
///     .with_algorithm(MstAlgorithm::Kruskal)
///     .build(&edges, 5)?;
/// assert_eq!(forest.total_weight(), 16);
/// assert_eq!(forest.edges().len(), 4);
/// assert!(forest.is_tree());
/// # Ok::<(), spanwise_core::ForestError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimumSpanningForestBuilder {
    algorithm: MstAlgorithm,
}

impl MinimumSpanningForestBuilder {
    /// Creates a builder that runs Kruskal's algorithm.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the construction strategy.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: MstAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn algorithm(&self) -> MstAlgorithm {
        self.algorithm
    }

    /// Computes a minimum spanning forest over `node_count` nodes.
    ///
    /// Edges are undirected and may arrive in any order. Ties between equal
    /// weights are broken by input position, so identical input always
    /// produces identical output. Disconnected input yields a forest with one
    /// tree per component; compare [`MinimumSpanningForest::edges`] against
    /// `node_count - 1` or call [`MinimumSpanningForest::is_tree`] when a
    /// single tree is required.
    ///
    /// # Errors
    /// Returns an error before doing any work when:
    /// - an edge references a node id `>= node_count`
    /// - an edge weight is not valid (for floats: NaN or infinite)
    ///
    /// Returns [`ForestError::WeightOverflow`] when the selected weights sum
    /// to a value `W` cannot represent.
    #[instrument(
        name = "core.mst.build",
        err,
        skip(self, edges),
        fields(algorithm = %self.algorithm, edge_count = edges.len()),
    )]
    pub fn build<W: Weight>(
        &self,
        edges: &[Edge<W>],
        node_count: usize,
    ) -> Result<MinimumSpanningForest<W>> {
        validate_edges(edges, node_count)?;

        let forest = match self.algorithm {
            MstAlgorithm::Kruskal => kruskal_validated(edges, node_count),
            MstAlgorithm::Prim => prim::prim_validated(edges, node_count),
        }?;

        debug!(
            selected = forest.edges.len(),
            components = forest.component_count,
            "spanning forest built"
        );
        Ok(forest)
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Shorthand for `MinimumSpanningForestBuilder::new().build(edges, node_count)`.
///
/// # Errors
/// See [`MinimumSpanningForestBuilder::build`].
pub fn kruskal<W: Weight>(edges: &[Edge<W>], node_count: usize) -> Result<MinimumSpanningForest<W>> {
    MinimumSpanningForestBuilder::new().build(edges, node_count)
}

fn kruskal_validated<W: Weight>(
    edges: &[Edge<W>],
    node_count: usize,
) -> Result<MinimumSpanningForest<W>> {
    let mut sorted: Vec<&Edge<W>> = edges.iter().collect();
    // `sort_by` is stable: equal weights keep their input order.
    sorted.sort_by(|left, right| Weight::total_cmp(&left.weight(), &right.weight()));

    let tree_size = node_count.saturating_sub(1);
    let mut sets = DisjointSet::new(node_count);
    let mut selected = Vec::with_capacity(tree_size);

    for edge in sorted {
        if selected.len() == tree_size {
            break;
        }
        if sets.union_unchecked(edge.source(), edge.target()) {
            selected.push(*edge);
        }
    }

    MinimumSpanningForest::from_selected(selected, node_count, sets.component_count())
}

#[cfg(test)]
mod property;
