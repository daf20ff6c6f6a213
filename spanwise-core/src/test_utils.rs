//! Shared test utilities for `spanwise-core`.

use std::collections::VecDeque;

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `SPANWISE_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Counts connected components with a breadth-first search over an
/// adjacency list, independently of any union-find code.
pub(crate) fn count_components_by_search(node_count: usize, pairs: &[(usize, usize)]) -> usize {
    let mut adjacency = vec![Vec::new(); node_count];
    for &(left, right) in pairs {
        adjacency[left].push(right);
        adjacency[right].push(left);
    }

    let mut seen = vec![false; node_count];
    let mut components = 0;
    let mut queue = VecDeque::new();
    for start in 0..node_count {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            for &next in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    components
}
