//! Seeded synthetic graphs.
//!
//! Every generated graph is connected: a shuffled spanning path is laid down
//! first, then extra random edges are added until the requested density is
//! reached.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use spanwise_core::{Edge, Road};

use crate::error::BenchSetupError;
use crate::params::GraphBenchParams;

const MAX_WEIGHT: u64 = 1_000_000;

/// Configuration for a synthetic graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Average number of edges per node; at least one.
    pub edges_per_node: usize,
    /// Seed for the generator.
    pub seed: u64,
}

/// A generated weighted graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<Edge<u64>>,
}

impl SyntheticGraph {
    /// Generates a connected graph described by `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when the node count or the
    /// density is zero.
    pub fn generate(config: &GraphConfig) -> Result<Self, BenchSetupError> {
        if config.node_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "node_count",
            });
        }
        if config.edges_per_node == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "edges_per_node",
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut order: Vec<usize> = (0..config.node_count).collect();
        order.shuffle(&mut rng);

        let target = config.node_count.saturating_mul(config.edges_per_node);
        let mut edges = Vec::with_capacity(target);
        for pair in order.windows(2) {
            if let [source, target_node] = *pair {
                edges.push(Edge::new(source, target_node, rng.gen_range(0..MAX_WEIGHT)));
            }
        }
        while edges.len() < target {
            let source = rng.gen_range(0..config.node_count);
            let target_node = rng.gen_range(0..config.node_count);
            edges.push(Edge::new(source, target_node, rng.gen_range(0..MAX_WEIGHT)));
        }

        Ok(Self {
            node_count: config.node_count,
            edges,
        })
    }

    /// Returns the node count.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the weighted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<u64>] { &self.edges }

    /// Returns the edges without weights.
    #[must_use]
    pub fn roads(&self) -> Vec<Road> {
        self.edges
            .iter()
            .map(|edge| (edge.source(), edge.target()))
            .collect()
    }

    /// Returns the label used for this graph in benchmark ids.
    #[must_use]
    pub fn params(&self) -> GraphBenchParams {
        GraphBenchParams {
            node_count: self.node_count,
            edge_count: self.edges.len(),
        }
    }
}
