//! Property runners for minimum spanning forest construction.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::test_utils::suite_proptest_config;
use crate::{Edge, ForestError, MinimumSpanningForestBuilder, MstAlgorithm, kruskal};

use super::oracle::{brute_force_forest_weight, forest_component_count, graph_component_count};
use super::strategies::{
    MstFixture, WeightDistribution, generate_fixture, mst_fixture_strategy, signed_graph_strategy,
    small_graph_strategy,
};

fn check_structure(fixture: &MstFixture) -> Result<(), TestCaseError> {
    let forest = kruskal(&fixture.edges, fixture.node_count)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;

    let components = forest_component_count(fixture.node_count, forest.edges()).ok_or_else(|| {
        TestCaseError::fail(format!(
            "selected edges contain a cycle (distribution={:?})",
            fixture.distribution
        ))
    })?;
    let expected = graph_component_count(fixture.node_count, &fixture.edges);

    prop_assert_eq!(components, expected);
    prop_assert_eq!(forest.component_count(), expected);
    prop_assert_eq!(forest.edges().len(), fixture.node_count - expected);
    prop_assert_eq!(forest.is_tree(), expected == 1);

    let summed: u32 = forest.edges().iter().map(|edge| edge.weight()).sum();
    prop_assert_eq!(forest.total_weight(), summed);

    let mut processed = forest.edges().iter().map(|edge| edge.weight());
    if let Some(mut previous) = processed.next() {
        for weight in processed {
            prop_assert!(previous <= weight, "edges are not in weight order");
            previous = weight;
        }
    }
    Ok(())
}

fn check_prim_agrees(fixture: &MstFixture) -> Result<(), TestCaseError> {
    let from_kruskal = kruskal(&fixture.edges, fixture.node_count)
        .map_err(|err| TestCaseError::fail(format!("kruskal failed: {err}")))?;
    let from_prim = MinimumSpanningForestBuilder::new()
        .with_algorithm(MstAlgorithm::Prim)
        .build(&fixture.edges, fixture.node_count)
        .map_err(|err| TestCaseError::fail(format!("prim failed: {err}")))?;

    prop_assert_eq!(from_prim.total_weight(), from_kruskal.total_weight());
    prop_assert_eq!(from_prim.edges().len(), from_kruskal.edges().len());
    prop_assert_eq!(from_prim.component_count(), from_kruskal.component_count());
    prop_assert!(forest_component_count(fixture.node_count, from_prim.edges()).is_some());
    Ok(())
}

/// Checks both algorithms against the exact total computed in `i128`.
fn check_signed_totals(node_count: usize, edges: &[Edge<i64>]) -> Result<(), TestCaseError> {
    let widened: Vec<Edge<i128>> = edges
        .iter()
        .map(|edge| Edge::new(edge.source(), edge.target(), i128::from(edge.weight())))
        .collect();
    let exact = kruskal(&widened, node_count)
        .map_err(|err| TestCaseError::fail(format!("i128 kruskal failed: {err}")))?;
    let expected = i64::try_from(exact.total_weight()).map_err(|_| ForestError::WeightOverflow {
        edge_count: exact.edges().len(),
    });

    for algorithm in [MstAlgorithm::Kruskal, MstAlgorithm::Prim] {
        let total = MinimumSpanningForestBuilder::new()
            .with_algorithm(algorithm)
            .build(edges, node_count)
            .map(|forest| forest.total_weight());
        prop_assert_eq!(&total, &expected, "algorithm={}", algorithm);
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn signed_totals_match_exact_sum((node_count, edges) in signed_graph_strategy()) {
        check_signed_totals(node_count, &edges)?;
    }

    #[test]
    fn kruskal_produces_a_spanning_forest(fixture in mst_fixture_strategy()) {
        check_structure(&fixture)?;
    }

    #[test]
    fn prim_matches_kruskal_weight(fixture in mst_fixture_strategy()) {
        check_prim_agrees(&fixture)?;
    }

    #[test]
    fn repeated_builds_are_identical(fixture in mst_fixture_strategy()) {
        let first = kruskal(&fixture.edges, fixture.node_count).expect("valid fixture");
        let second = kruskal(&fixture.edges, fixture.node_count).expect("valid fixture");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn kruskal_weight_is_minimal((node_count, edges) in small_graph_strategy()) {
        let forest = kruskal(&edges, node_count).expect("generated ids are in range");
        let expected = brute_force_forest_weight(node_count, &edges);
        prop_assert_eq!(u64::from(forest.total_weight()), expected);
    }
}

#[rstest::rstest]
#[case::unique_42(WeightDistribution::Unique, 42)]
#[case::identical_42(WeightDistribution::ManyIdentical, 42)]
#[case::identical_7777(WeightDistribution::ManyIdentical, 7777)]
#[case::sparse_999(WeightDistribution::Sparse, 999)]
#[case::disconnected_42(WeightDistribution::Disconnected, 42)]
fn seeded_fixtures_hold_invariants(#[case] distribution: WeightDistribution, #[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let fixture = generate_fixture(distribution, &mut rng);
    check_structure(&fixture).expect("structure must hold");
    check_prim_agrees(&fixture).expect("prim must agree");
}

#[rstest::rstest]
#[case::max_before_negative(4, &[(0, 1, i64::MAX), (1, 2, 1), (2, 3, -5)])]
#[case::min_before_positive(4, &[(0, 1, i64::MIN), (1, 2, -1), (2, 3, 5)])]
#[case::real_overflow(3, &[(0, 1, i64::MAX), (1, 2, i64::MAX)])]
#[case::forest(5, &[(0, 1, i64::MIN), (2, 3, i64::MAX), (3, 4, -7)])]
fn signed_extremes_agree_with_exact_sum(
    #[case] node_count: usize,
    #[case] raw: &[(usize, usize, i64)],
) {
    let edges: Vec<Edge<i64>> = raw.iter().copied().map(Edge::from).collect();
    check_signed_totals(node_count, &edges).expect("totals must agree");
}

#[test]
fn brute_force_oracle_matches_known_tree() {
    let edges = [
        crate::Edge::new(0, 1, 2),
        crate::Edge::new(0, 3, 6),
        crate::Edge::new(1, 3, 8),
        crate::Edge::new(1, 2, 3),
        crate::Edge::new(1, 4, 5),
        crate::Edge::new(2, 4, 7),
    ];
    assert_eq!(brute_force_forest_weight(5, &edges), 16);
}
