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

use super::{BipartiteGraph, Matching, MatchingSolver};
use crate::err::SolverFailure;

/// Kuhn's algorithm: for every left node search an augmenting path by depth-first search
/// over alternating edges. O(V * E), which is plenty for timetables of a single line.
pub struct AugmentingPathMatcher;

impl MatchingSolver for AugmentingPathMatcher {
    fn maximum_matching(&self, graph: &BipartiteGraph) -> Result<Matching, SolverFailure> {
        let adjacency = graph.adjacency();
        // owner[r] is the left node currently matched with r
        let mut owner: Vec<Option<usize>> = vec![None; graph.right_count()];
        let mut visited = vec![false; graph.right_count()];
        for left in 0..graph.left_count() {
            visited.iter_mut().for_each(|v| *v = false);
            augment(left, &adjacency, &mut visited, &mut owner);
        }
        Ok(Matching::new(
            owner
                .iter()
                .enumerate()
                .filter_map(|(r, l)| l.map(|l| (l, r)))
                .collect(),
        ))
    }
}

fn augment(
    left: usize,
    adjacency: &[Vec<usize>],
    visited: &mut [bool],
    owner: &mut [Option<usize>],
) -> bool {
    for &right in adjacency[left].iter() {
        if visited[right] {
            continue;
        }
        visited[right] = true;
        let free = match owner[right] {
            None => true,
            Some(other) => augment(other, adjacency, visited, owner),
        };
        if free {
            owner[right] = Some(left);
            return true;
        }
    }
    false
}
