// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use model::config::{ConfigSolver, MatchingAlgorithm};

use super::*;

/// shuttle instance: left and right nodes are o0, o1, o2, i0, i1, i2.
fn shuttle_graph() -> BipartiteGraph {
    BipartiteGraph::new(
        6,
        6,
        vec![(0, 3), (0, 4), (0, 5), (1, 4), (1, 5), (2, 5), (3, 2)],
    )
}

/// maximum matching size by enumerating all edge subsets.
fn brute_force_matching_size(graph: &BipartiteGraph) -> usize {
    let edges = graph.edges();
    (0u32..(1 << edges.len()))
        .filter_map(|mask| {
            let chosen: Vec<(usize, usize)> = edges
                .iter()
                .enumerate()
                .filter(|(k, _)| mask & (1 << k) != 0)
                .map(|(_, &e)| e)
                .collect();
            graph
                .verify(&Matching::new(chosen.clone()))
                .ok()
                .map(|_| chosen.len())
        })
        .max()
        .unwrap_or(0)
}

/// deterministic pseudo-random graphs.
fn sample_graphs() -> Vec<BipartiteGraph> {
    let mut seed: u64 = 7;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };
    (0..25)
        .map(|_| {
            let left = 1 + next() % 6;
            let right = 1 + next() % 6;
            let edges: Vec<(usize, usize)> = (0..left)
                .flat_map(|l| (0..right).map(move |r| (l, r)))
                .filter(|_| next() % 3 == 0)
                .take(14)
                .collect();
            BipartiteGraph::new(left, right, edges)
        })
        .collect()
}

#[test]
fn shuttle_matching_is_unique() {
    let expected = Matching::new(vec![(0, 3), (1, 4), (2, 5), (3, 2)]);
    for matcher in [
        &PushRelabelMatcher as &dyn MatchingSolver,
        &AugmentingPathMatcher,
    ] {
        let matching = matcher.maximum_matching(&shuttle_graph()).unwrap();
        assert_eq!(matching, expected);
    }
}

#[test]
fn matchers_are_exact() {
    for graph in sample_graphs() {
        let expected = brute_force_matching_size(&graph);
        for matcher in [
            &PushRelabelMatcher as &dyn MatchingSolver,
            &AugmentingPathMatcher,
        ] {
            let matching = matcher.maximum_matching(&graph).unwrap();
            assert!(graph.verify(&matching).is_ok());
            assert_eq!(matching.size(), expected, "{:?}", graph);
        }
    }
}

#[test]
fn graph_without_edges_has_empty_matching() {
    let graph = BipartiteGraph::new(4, 4, vec![]);
    assert_eq!(PushRelabelMatcher.maximum_matching(&graph).unwrap().size(), 0);
    assert_eq!(AugmentingPathMatcher.maximum_matching(&graph).unwrap().size(), 0);
    let graph = BipartiteGraph::default();
    assert_eq!(PushRelabelMatcher.maximum_matching(&graph).unwrap().size(), 0);
    assert_eq!(AugmentingPathMatcher.maximum_matching(&graph).unwrap().size(), 0);
}

#[test]
fn out_of_range_edges_are_dropped() {
    let graph = BipartiteGraph::new(2, 2, vec![(0, 1), (2, 0), (1, 5)]);
    assert_eq!(graph.edges(), &[(0, 1)]);
}

#[test]
fn verify_rejects_invalid_matchings() {
    let graph = shuttle_graph();
    assert!(graph.verify(&Matching::new(vec![(0, 3), (1, 4)])).is_ok());
    // not an edge
    assert!(matches!(
        graph.verify(&Matching::new(vec![(0, 1)])),
        Err(SolverFailure::InvalidMatching(_))
    ));
    // left node used twice
    assert!(graph.verify(&Matching::new(vec![(0, 3), (0, 4)])).is_err());
    // right node used twice
    assert!(graph.verify(&Matching::new(vec![(0, 5), (1, 5)])).is_err());
}

struct SlowMatcher(Duration);

impl MatchingSolver for SlowMatcher {
    fn maximum_matching(&self, graph: &BipartiteGraph) -> Result<Matching, SolverFailure> {
        thread::sleep(self.0);
        AugmentingPathMatcher.maximum_matching(graph)
    }
}

struct PanickingMatcher;

impl MatchingSolver for PanickingMatcher {
    fn maximum_matching(&self, _: &BipartiteGraph) -> Result<Matching, SolverFailure> {
        panic!("solver crashed");
    }
}

#[test]
fn time_limit_expires() {
    let matcher = TimeLimitedMatcher::new(
        Arc::new(SlowMatcher(Duration::from_millis(500))),
        Duration::from_millis(20),
    );
    assert_eq!(
        matcher.maximum_matching(&shuttle_graph()),
        Err(SolverFailure::TimeLimitExceeded(Duration::from_millis(20)))
    );
}

#[test]
fn result_within_time_limit_is_passed_on() {
    let matcher = TimeLimitedMatcher::new(Arc::new(PushRelabelMatcher), Duration::from_secs(30));
    assert_eq!(matcher.maximum_matching(&shuttle_graph()).unwrap().size(), 4);
}

#[test]
fn crashed_solver_is_reported() {
    let matcher = TimeLimitedMatcher::new(Arc::new(PanickingMatcher), Duration::from_secs(30));
    assert!(matches!(
        matcher.maximum_matching(&shuttle_graph()),
        Err(SolverFailure::Aborted(_))
    ));
}

#[test]
fn configured_matcher() {
    for algorithm in [MatchingAlgorithm::PushRelabel, MatchingAlgorithm::AugmentingPath] {
        for time_limit in [None, Some(Duration::from_secs(10))] {
            let matcher = matcher_for(&ConfigSolver {
                time_limit,
                algorithm,
            });
            assert_eq!(matcher.maximum_matching(&shuttle_graph()).unwrap().size(), 4);
        }
    }
}
