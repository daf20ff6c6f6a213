//! Spanwise core library.
//!
//! A disjoint-set forest (union by rank, iterative path compression) and the
//! spanning-forest algorithms built on it: Kruskal, Prim, and the unweighted
//! connectivity queries that share the same union-find machinery.
//!
//! ```
//! use spanwise_core::{Edge, kruskal};
//!
//! let edges = [Edge::new(0, 1, 2), Edge::new(1, 2, 3), Edge::new(0, 2, 9)];
//! let forest = kruskal(&edges, 3)?;
//! assert_eq!(forest.total_weight(), 5);
//! assert!(forest.is_tree());
//! # Ok::<(), spanwise_core::ForestError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
mod disjoint_set;
mod edge;
mod edge_list;
mod error;
mod mst;
#[cfg(test)]
mod test_utils;
mod weight;

pub use crate::{
    connectivity::{Road, component_count, connecting_roads, has_cycle},
    disjoint_set::{DisjointSet, node_count_from_signed},
    edge::Edge,
    edge_list::{EdgeList, EdgeListFormat, IndexBase, read_edge_list},
    error::{EdgeListError, EdgeListErrorCode, ErrorKind, ForestError, ForestErrorCode, Result},
    mst::{MinimumSpanningForest, MinimumSpanningForestBuilder, MstAlgorithm, kruskal},
    weight::Weight,
};
