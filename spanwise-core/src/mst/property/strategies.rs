//! Graph generators for MST property tests.
//!
//! Weights are integers so that totals from different algorithms compare
//! exactly. [`signed_graph_strategy`] mixes negative weights with values near
//! the bounds of `i64`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 48;

/// Weight distribution used when generating a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// A pool of one to three weights shared by every edge.
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
}

/// Generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    pub node_count: usize,
    pub edges: Vec<Edge<u32>>,
    pub distribution: WeightDistribution,
}

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    let distribution = prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Disconnected),
    ];
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Small graphs whose spanning forests can be enumerated exhaustively.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge<u32>>)> {
    (1_usize..=6).prop_flat_map(|node_count| {
        let edge = (0..node_count, 0..node_count, 0_u32..6)
            .prop_map(|(source, target, weight)| Edge::new(source, target, weight));
        (Just(node_count), proptest::collection::vec(edge, 0..=10))
    })
}

/// Graphs with signed weights, some close enough to `i64::MIN` or `i64::MAX`
/// that a forest total may overflow.
pub(super) fn signed_graph_strategy() -> impl Strategy<Value = (usize, Vec<Edge<i64>>)> {
    let weight = prop_oneof![
        4 => -1_000_i64..1_000,
        1 => (i64::MAX - 1_000)..=i64::MAX,
        1 => i64::MIN..=(i64::MIN + 1_000),
    ];
    (2_usize..=12).prop_flat_map(move |node_count| {
        let edge = (0..node_count, 0..node_count, weight.clone())
            .prop_map(|(source, target, weight)| Edge::new(source, target, weight));
        (Just(node_count), proptest::collection::vec(edge, 0..=24))
    })
}

pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edges = match distribution {
        WeightDistribution::Unique => random_pairs(rng, node_count, 0.3, |r| r.gen_range(0..1_000_000)),
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u32> = (0..rng.gen_range(1..=3)).map(|_| rng.gen_range(1..=10)).collect();
            random_pairs(rng, node_count, 0.4, move |r| pool[r.gen_range(0..pool.len())])
        }
        WeightDistribution::Sparse => sparse(rng, node_count),
        WeightDistribution::Disconnected => disconnected(rng, node_count),
    };
    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

fn random_pairs(
    rng: &mut SmallRng,
    node_count: usize,
    probability: f64,
    mut weight: impl FnMut(&mut SmallRng) -> u32,
) -> Vec<Edge<u32>> {
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(Edge::new(source, target, w));
            }
        }
    }
    edges
}

fn sparse(rng: &mut SmallRng, node_count: usize) -> Vec<Edge<u32>> {
    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut edges: Vec<Edge<u32>> = order
        .windows(2)
        .map(|pair| Edge::new(pair[0], pair[1], rng.gen_range(0..100)))
        .collect();
    for _ in 0..rng.gen_range(0..=node_count) {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push(Edge::new(source, target, rng.gen_range(0..100)));
    }
    edges
}

fn disconnected(rng: &mut SmallRng, node_count: usize) -> Vec<Edge<u32>> {
    let groups = rng.gen_range(2..=4);
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if source % groups == target % groups && rng.gen_bool(0.5) {
                edges.push(Edge::new(source, target, rng.gen_range(0..50)));
            }
        }
    }
    edges
}
