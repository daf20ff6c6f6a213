//! Union-find (disjoint set union) over the node ids `0..n`.
//!
//! [`DisjointSet`] combines full path compression with union by rank, giving
//! `O(α(n))` amortised cost per operation. `find` resolves the root and then
//! re-parents the path in a second pass, so deep trees never grow the call
//! stack.

use crate::edge::check_node;
use crate::error::{ForestError, Result};

/// Partition of `{0 .. n-1}` into disjoint sets.
///
/// A node is its set's representative iff it is its own parent. Merges are
/// decided by rank only; the structure never splits a set.
///
/// # Examples
/// ```
/// use spanwise_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(1)?, sets.find(0)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), spanwise_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets labelled `0..n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way to the root is re-parented directly onto
    /// it.
    ///
    /// # Errors
    /// Returns [`ForestError::NodeOutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        check_node(node, self.len())?;
        Ok(self.find_unchecked(node))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without touching the structure when both nodes already
    /// share a set. The root with strictly greater rank survives; on equal
    /// ranks the root of `left` survives and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`ForestError::NodeOutOfRange`] when either id is out of range.
    /// Both ids are checked before anything is mutated.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        check_node(left, self.len())?;
        check_node(right, self.len())?;
        Ok(self.union_unchecked(left, right))
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`ForestError::NodeOutOfRange`] when either id is out of range.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool> {
        check_node(left, self.len())?;
        check_node(right, self.len())?;
        Ok(self.find_unchecked(left) == self.find_unchecked(right))
    }

    /// Returns every set representative in ascending order.
    #[must_use]
    pub fn representatives(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(node, &parent)| (node == parent).then_some(node))
            .collect()
    }

    pub(crate) fn find_unchecked(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    pub(crate) fn union_unchecked(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find_unchecked(left);
        let right_root = self.find_unchecked(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        let (root, child) = if right_rank > left_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.parent[child] = root;
        if left_rank == right_rank {
            self.rank[root] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }

    #[cfg(test)]
    fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }

    #[cfg(test)]
    fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }
}

/// Converts a signed node count into a size for [`DisjointSet::new`].
///
/// # Errors
/// Returns [`ForestError::NegativeNodeCount`] when `raw` is negative.
///
/// # Examples
/// ```
/// use spanwise_core::{ErrorKind, node_count_from_signed};
///
/// assert_eq!(node_count_from_signed(5)?, 5);
/// let err = node_count_from_signed(-1).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// # Ok::<(), spanwise_core::ForestError>(())
/// ```
pub fn node_count_from_signed(raw: i64) -> Result<usize> {
    usize::try_from(raw).map_err(|_| ForestError::NegativeNodeCount { got: raw })
}
