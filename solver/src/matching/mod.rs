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

pub mod augmenting_path;
pub mod push_relabel;
pub mod time_limited;

use std::collections::HashSet;
use std::sync::Arc;

use model::config::{ConfigSolver, MatchingAlgorithm};

use crate::err::SolverFailure;
use augmenting_path::AugmentingPathMatcher;
use push_relabel::PushRelabelMatcher;
use time_limited::TimeLimitedMatcher;

/// Bipartite graph with left nodes `0..left_count` and right nodes `0..right_count`.
/// An edge (l, r) means that l may be matched with r.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BipartiteGraph {
    left_count: usize,
    right_count: usize,
    edges: Vec<(usize, usize)>,
}

impl BipartiteGraph {
    /// edges with an endpoint out of range are dropped.
    pub fn new(left_count: usize, right_count: usize, edges: Vec<(usize, usize)>) -> Self {
        let edges = edges
            .into_iter()
            .filter(|&(l, r)| l < left_count && r < right_count)
            .collect();
        BipartiteGraph {
            left_count,
            right_count,
            edges,
        }
    }

    pub fn left_count(&self) -> usize {
        self.left_count
    }

    pub fn right_count(&self) -> usize {
        self.right_count
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// right neighbors of every left node, in edge order.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adjacency = vec![Vec::new(); self.left_count];
        for &(l, r) in self.edges.iter() {
            adjacency[l].push(r);
        }
        adjacency
    }

    /// checks that every pair is an edge and that no node is matched twice.
    pub fn verify(&self, matching: &Matching) -> Result<(), SolverFailure> {
        let edges: HashSet<(usize, usize)> = self.edges.iter().copied().collect();
        let mut left_used = vec![false; self.left_count];
        let mut right_used = vec![false; self.right_count];
        for &(l, r) in matching.pairs() {
            if !edges.contains(&(l, r)) {
                return Err(SolverFailure::InvalidMatching(format!(
                    "({}, {}) is not an edge",
                    l, r
                )));
            }
            if std::mem::replace(&mut left_used[l], true) {
                return Err(SolverFailure::InvalidMatching(format!(
                    "left node {} is matched twice",
                    l
                )));
            }
            if std::mem::replace(&mut right_used[r], true) {
                return Err(SolverFailure::InvalidMatching(format!(
                    "right node {} is matched twice",
                    r
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    pairs: Vec<(usize, usize)>,
}

impl Matching {
    /// pairs are sorted, so equal matchings compare equal.
    pub fn new(mut pairs: Vec<(usize, usize)>) -> Matching {
        pairs.sort_unstable();
        Matching { pairs }
    }

    pub fn empty() -> Matching {
        Matching::default()
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn size(&self) -> usize {
        self.pairs.len()
    }
}

/// An exact maximum-cardinality bipartite matching algorithm. Heuristics are not allowed:
/// the fleet size is only minimal if the matching is maximum.
pub trait MatchingSolver: Send + Sync {
    fn maximum_matching(&self, graph: &BipartiteGraph) -> Result<Matching, SolverFailure>;
}

/// the matching solver as configured, wrapped with the time limit if there is one.
pub fn matcher_for(config: &ConfigSolver) -> Arc<dyn MatchingSolver> {
    let matcher: Arc<dyn MatchingSolver> = match config.algorithm {
        MatchingAlgorithm::PushRelabel => Arc::new(PushRelabelMatcher),
        MatchingAlgorithm::AugmentingPath => Arc::new(AugmentingPathMatcher),
    };
    match config.time_limit {
        Some(time_limit) => Arc::new(TimeLimitedMatcher::new(matcher, time_limit)),
        None => matcher,
    }
}

#[cfg(test)]
mod tests;
