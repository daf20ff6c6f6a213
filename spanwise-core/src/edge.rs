//! Weighted undirected edges.

use crate::{
    Weight,
    error::{ForestError, Result},
};

/// An immutable weighted edge between two node ids.
///
/// The edge is undirected; the orientation supplied at construction is kept
/// so outputs echo the caller's input.
///
/// # Examples
/// ```
/// use spanwise_core::Edge;
///
/// let edge = Edge::new(0, 3, 6_u32);
/// assert_eq!((edge.source(), edge.target(), edge.weight()), (0, 3, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Copy> Edge<W> {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<W: Copy> From<(usize, usize, W)> for Edge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Checks every endpoint against `node_count` and every weight for validity.
///
/// Runs over the whole slice before any forest state exists so that failures
/// never leave partial results behind.
pub(crate) fn validate_edges<W: Weight>(edges: &[Edge<W>], node_count: usize) -> Result<()> {
    for edge in edges {
        check_node(edge.source, node_count)?;
        check_node(edge.target, node_count)?;
        if !edge.weight.is_valid() {
            return Err(ForestError::NonFiniteWeight {
                left: edge.source,
                right: edge.target,
            });
        }
    }
    Ok(())
}

pub(crate) const fn check_node(node: usize, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        Err(ForestError::NodeOutOfRange { node, node_count })
    }
}
